//! Ticker selection to normalized summary.
//!
//! A run picks exactly one source from the selected fund, fetches it once,
//! extracts the sector mapping and normalizes it. There is no retry.

use crate::config::FetchConfig;
use crate::error::Result;
use crate::http_client::HttpClient;
use crate::normalize::normalize;
use crate::table::SectorTable;
use crate::types::Fund;

pub const INVALID_TICKER_MESSAGE: &str = "Invalid ticker. Please enter 'SPY' or 'QQQ'.";

/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Comma-separated `TICKER:weight` tokens; empty when nothing matched.
    Normalized(String),
    /// The selection was not a supported fund. Nothing was fetched.
    InvalidTicker,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Normalized(line) => f.write_str(line),
            Outcome::InvalidTicker => f.write_str(INVALID_TICKER_MESSAGE),
        }
    }
}

/// Run one selection end to end.
pub async fn run(
    selection: &str,
    client: &HttpClient,
    config: &FetchConfig,
    table: &SectorTable,
) -> Result<Outcome> {
    let Some(fund) = Fund::parse(selection) else {
        tracing::info!(selection, "unsupported ticker");
        return Ok(Outcome::InvalidTicker);
    };

    let url = config.url_for(fund);
    tracing::info!(%fund, url, "retrieving sector weights");

    let body = client.get(url).await?;
    let weights = fund.source_kind().extract(&body)?;
    let line = normalize(&weights.to_pairs_string(), table)?;

    Ok(Outcome::Normalized(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_ticker_short_circuits() {
        // Unroutable URLs prove nothing is fetched.
        let config = FetchConfig::default()
            .with_url(Fund::Spy, "http://127.0.0.1:9/spy")
            .with_url(Fund::Qqq, "http://127.0.0.1:9/qqq");
        let client = HttpClient::new(&config).unwrap();
        let table = SectorTable::default();

        let outcome = tokio_test::block_on(run("VTI", &client, &config, &table)).unwrap();
        assert_eq!(outcome, Outcome::InvalidTicker);
        assert_eq!(
            outcome.to_string(),
            "Invalid ticker. Please enter 'SPY' or 'QQQ'."
        );
    }

    #[test]
    fn test_normalized_outcome_displays_line() {
        let outcome = Outcome::Normalized("XLE:10.2,XLU:3.1".to_string());
        assert_eq!(outcome.to_string(), "XLE:10.2,XLU:3.1");
    }
}
