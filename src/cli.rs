//! Command-line interface for the DeFi position viewer
//!
//! One straight-line pipeline per invocation: resolve the wallet address,
//! validate it, fetch the protocol list from DeBank, flatten it into
//! positions, and print the two-section report.

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::address::is_valid_eth_address;
use crate::api::DebankClient;
use crate::config::Config;
use crate::display;
use crate::logging;
use crate::positions::extract_positions;

#[derive(Parser)]
#[command(name = "defiview")]
#[command(version)]
#[command(about = "DeFi position viewer for EVM wallets, powered by DeBank", long_about = None)]
pub struct Cli {
    /// Wallet address to inspect (prompted for when omitted)
    pub address: Option<String>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        logging::init_logging(self.verbose);

        println!("{}", "🔍 DeBank DeFi Position Viewer".bright_blue().bold());
        println!();

        let address = match self.address {
            Some(address) => address.trim().to_string(),
            None => prompt_for_address()?,
        };

        if !is_valid_eth_address(&address) {
            println!("{}", "❌ Invalid wallet address.".bright_red());
            return Err(anyhow!("invalid wallet address: {}", address));
        }

        let config = Config::from_env()?;
        let client = DebankClient::new(&config)?;

        println!();
        println!("{}", "📡 Fetching data from DeBank...".bright_cyan());

        let protocols = match client.fetch_protocols(&address).await {
            Ok(protocols) => protocols,
            Err(e) => {
                // Degrade to an empty portfolio; the report prints its
                // empty-section fallbacks and the run still exits cleanly.
                warn!("API request failed: {}", e);
                println!("{}", format!("⚠️  API request failed: {}", e).bright_yellow());
                Vec::new()
            }
        };

        let report = extract_positions(&protocols);
        display::print_report(&report);

        Ok(())
    }
}

fn prompt_for_address() -> Result<String> {
    print!("Enter your wallet address (0x...): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read wallet address from stdin")?;

    Ok(line.trim().to_string())
}
