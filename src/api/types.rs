//! Type definitions for DeBank API responses

use serde::{Deserialize, Serialize};

/// DeBank API error types
#[derive(Debug, thiserror::Error)]
pub enum DebankError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One protocol entry from `/user/all_complex_protocol_list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protocol {
    /// Display name, e.g. "Lido"
    pub name: Option<String>,

    /// Open positions in this protocol, grouped by product
    #[serde(default)]
    pub portfolio_item_list: Vec<PortfolioItem>,
}

/// A single portfolio item (one product position within a protocol)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Display name, e.g. "Staked ETH"
    pub name: Option<String>,

    /// Descriptive type tags, e.g. ["staked"] or ["lending", "collateral"]
    #[serde(default)]
    pub detail_types: Vec<String>,

    /// Token-level breakdown of the position
    #[serde(default)]
    pub detail: ItemDetail,
}

/// Detail record of a portfolio item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDetail {
    /// Tokens supplied into the position
    #[serde(default)]
    pub supply_token_list: Vec<SupplyToken>,
}

/// A token held inside a portfolio item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyToken {
    /// Token symbol, e.g. "stETH"
    pub symbol: Option<String>,

    /// Token quantity
    pub amount: Option<f64>,

    /// Unit price in USD
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_protocol() {
        let protocols: Vec<Protocol> = serde_json::from_str(
            r#"[
                {
                    "name": "Lido",
                    "portfolio_item_list": [
                        {
                            "name": "Staked ETH",
                            "detail_types": ["staked"],
                            "detail": {
                                "supply_token_list": [
                                    {"symbol": "stETH", "amount": 2.5, "price": 3000}
                                ]
                            }
                        }
                    ]
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(protocols.len(), 1);
        assert_eq!(protocols[0].name.as_deref(), Some("Lido"));
        let item = &protocols[0].portfolio_item_list[0];
        assert_eq!(item.detail_types, vec!["staked"]);
        assert_eq!(item.detail.supply_token_list[0].amount, Some(2.5));
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        // Every field the provider may omit defaults instead of failing
        let protocols: Vec<Protocol> = serde_json::from_str(
            r#"[
                {},
                {"name": "Aave"},
                {"portfolio_item_list": [{}]},
                {"portfolio_item_list": [{"detail": {}}]},
                {"portfolio_item_list": [{"detail": {"supply_token_list": [{}]}}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(protocols.len(), 5);
        assert!(protocols[0].name.is_none());
        assert!(protocols[0].portfolio_item_list.is_empty());
        assert!(protocols[2].portfolio_item_list[0].detail_types.is_empty());
        let token = &protocols[4].portfolio_item_list[0].detail.supply_token_list[0];
        assert!(token.symbol.is_none());
        assert!(token.amount.is_none());
        assert!(token.price.is_none());
    }

    #[test]
    fn test_decode_rejects_non_array_body() {
        let result = serde_json::from_str::<Vec<Protocol>>(r#"{"error": "nope"}"#);
        assert!(result.is_err());
    }
}
