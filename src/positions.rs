//! Position extraction from the protocol response
//!
//! Flattens the nested protocol → portfolio item → supply token structure
//! into flat position records, and splits out the staking subset.

use serde::Serialize;

use crate::api::{PortfolioItem, Protocol};

/// Substring that marks an item as a staking position, matched against the
/// lower-cased item name and type tags. Deliberately a substring match:
/// "staked_lp" and "Restaked Pool" both qualify.
const STAKING_MARKER: &str = "staked";

/// A single flattened position, one per supply token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub protocol: String,
    pub category: String,
    pub token: String,
    pub amount: f64,
    pub usd_value: f64,
}

/// The two reporting views over one wallet's positions. `staking` is a
/// subset of `all`; both preserve source order.
#[derive(Debug, Default)]
pub struct PositionReport {
    pub staking: Vec<Position>,
    pub all: Vec<Position>,
}

/// Flatten the protocol list into the all/staking position views.
///
/// Total over any decoded input: protocols without items and items without
/// tokens contribute nothing, and absent optional fields fall back to
/// defaults ("Unknown Protocol", "Other", zero amounts) rather than failing.
pub fn extract_positions(protocols: &[Protocol]) -> PositionReport {
    let mut report = PositionReport::default();

    for protocol in protocols {
        let protocol_name = protocol.name.as_deref().unwrap_or("Unknown Protocol");

        for item in &protocol.portfolio_item_list {
            let category = item.name.as_deref().unwrap_or("Other");
            let staking = is_staking_item(item);

            for token in &item.detail.supply_token_list {
                let amount = token.amount.unwrap_or(0.0);
                let price = token.price.unwrap_or(0.0);

                let position = Position {
                    protocol: protocol_name.to_string(),
                    category: category.to_string(),
                    token: token
                        .symbol
                        .clone()
                        .unwrap_or_else(|| "Unknown".to_string()),
                    amount,
                    usd_value: amount * price,
                };

                if staking {
                    report.staking.push(position.clone());
                }
                report.all.push(position);
            }
        }
    }

    report
}

fn is_staking_item(item: &PortfolioItem) -> bool {
    let name = item.name.as_deref().unwrap_or("").to_lowercase();

    name.contains(STAKING_MARKER)
        || item
            .detail_types
            .iter()
            .any(|tag| tag.to_lowercase().contains(STAKING_MARKER))
}
