//! DeBank Pro OpenAPI integration
//!
//! This module provides a typed response model and a small client for the
//! "all complex protocol list" endpoint, which returns every protocol a
//! wallet holds positions in.

pub mod client;
pub mod types;

pub use client::DebankClient;
pub use types::{DebankError, ItemDetail, PortfolioItem, Protocol, SupplyToken};
