//! Console rendering of the position report

use owo_colors::OwoColorize;

use crate::positions::{Position, PositionReport};

/// Render the staking section: one line per position, amounts with four
/// decimals and USD values with two.
pub fn render_staking_section(positions: &[Position]) -> String {
    let mut out = format!("{}\n", "🔒 Staking Positions:".bright_blue().bold());

    if positions.is_empty() {
        out.push_str(&format!("{}\n", "  None found.".bright_black()));
    } else {
        for pos in positions {
            out.push_str(&format!(
                "  {} | {}: {:.4} (${:.2})\n",
                pos.protocol, pos.token, pos.amount, pos.usd_value
            ));
        }
    }

    out
}

/// Render the all-positions section, including the item category.
pub fn render_all_section(positions: &[Position]) -> String {
    let mut out = format!("{}\n", "🌐 All DeFi Positions:".bright_blue().bold());

    if positions.is_empty() {
        out.push_str(&format!("{}\n", "  No DeFi positions found.".bright_black()));
    } else {
        for pos in positions {
            out.push_str(&format!(
                "  {} [{}] | {}: {:.4} (${:.2})\n",
                pos.protocol, pos.category, pos.token, pos.amount, pos.usd_value
            ));
        }
    }

    out
}

/// Print the full two-section report to stdout.
pub fn print_report(report: &PositionReport) {
    println!();
    print!("{}", render_staking_section(&report.staking));
    println!();
    print!("{}", render_all_section(&report.all));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_position() -> Position {
        Position {
            protocol: "Lido".to_string(),
            category: "Staked ETH".to_string(),
            token: "stETH".to_string(),
            amount: 2.5,
            usd_value: 7500.0,
        }
    }

    #[test]
    fn test_empty_sections_show_fallback_lines() {
        assert!(render_staking_section(&[]).contains("  None found."));
        assert!(render_all_section(&[]).contains("  No DeFi positions found."));
    }

    #[test]
    fn test_staking_row_format() {
        let out = render_staking_section(&[sample_position()]);
        assert!(out.contains("  Lido | stETH: 2.5000 ($7500.00)"));
        assert!(!out.contains("None found."));
    }

    #[test]
    fn test_all_row_includes_category() {
        let out = render_all_section(&[sample_position()]);
        assert!(out.contains("  Lido [Staked ETH] | stETH: 2.5000 ($7500.00)"));
    }

    #[test]
    fn test_zero_value_row_format() {
        let position = Position {
            usd_value: 0.0,
            amount: 10.0,
            ..sample_position()
        };
        let out = render_all_section(&[position]);
        assert!(out.contains("10.0000 ($0.00)"));
    }

    #[test]
    fn test_rows_render_in_given_order() {
        let first = sample_position();
        let second = Position {
            token: "wstETH".to_string(),
            ..sample_position()
        };
        let out = render_staking_section(&[first, second]);

        let steth = out.find("stETH:").unwrap();
        let wsteth = out.find("wstETH:").unwrap();
        assert!(steth < wsteth);
    }
}
