//! Sector weights for SPY and QQQ, normalized to SPDR sector ETF tickers.
//!
//! Two upstream pages are scraped: one embeds a chart configuration whose
//! `data.csv` field carries `sector;weight` lines, the other renders an HTML
//! table. Both are reduced to an ordered [`SectorWeights`] mapping, then
//! translated to `TICKER:weight` tokens through a [`SectorTable`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod http_client;
pub mod normalize;
pub mod table;
pub mod types;

pub use config::FetchConfig;
pub use dispatch::{run, Outcome, INVALID_TICKER_MESSAGE};
pub use error::{Result, SectorError};
pub use extract::{extract_embedded_csv, extract_html_table, SourceKind};
pub use http_client::HttpClient;
pub use normalize::normalize;
pub use table::SectorTable;
pub use types::{Fund, SectorWeight, SectorWeights};
