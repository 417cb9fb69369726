//! Fetch configuration loading and resolution.

use crate::types::Fund;

/// Environment variable overriding the request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "SECTOR_WEIGHTS_TIMEOUT_MS";

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const SPY_URL: &str =
    "https://www.ssga.com/us/en/intermediary/etfs/funds/spdr-sp-500-etf-trust-spy";
pub const QQQ_URL: &str = "https://app.everviz.com/inject/PDI1PphBI/";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                  AppleWebKit/537.36 (KHTML, like Gecko) \
                                  Chrome/131.0.0.0 Safari/537.36";

/// Settings for the single page fetch of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout_ms: u64,
    pub user_agent: String,
    pub spy_url: String,
    pub qqq_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            spy_url: SPY_URL.to_string(),
            qqq_url: QQQ_URL.to_string(),
        }
    }
}

impl FetchConfig {
    /// Resolve the configuration: explicit timeout, then `SECTOR_WEIGHTS_TIMEOUT_MS`,
    /// then the default.
    pub fn resolve(explicit_timeout_ms: Option<u64>) -> Self {
        let timeout_ms = explicit_timeout_ms
            .or_else(|| timeout_from_env(std::env::var(TIMEOUT_ENV).ok().as_deref()))
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            timeout_ms,
            ..Self::default()
        }
    }

    /// Point a fund at a different source URL.
    pub fn with_url(mut self, fund: Fund, url: impl Into<String>) -> Self {
        match fund {
            Fund::Spy => self.spy_url = url.into(),
            Fund::Qqq => self.qqq_url = url.into(),
        }
        self
    }

    pub fn url_for(&self, fund: Fund) -> &str {
        match fund {
            Fund::Spy => &self.spy_url,
            Fund::Qqq => &self.qqq_url,
        }
    }
}

fn timeout_from_env(value: Option<&str>) -> Option<u64> {
    let raw = value?;
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(ms),
        _ => {
            tracing::warn!(value = raw, "ignoring invalid {TIMEOUT_ENV}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_fixed_sources() {
        let config = FetchConfig::default();
        assert_eq!(config.url_for(Fund::Spy), SPY_URL);
        assert_eq!(config.url_for(Fund::Qqq), QQQ_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_explicit_timeout_wins() {
        let config = FetchConfig::resolve(Some(1_500));
        assert_eq!(config.timeout_ms, 1_500);
    }

    #[test]
    fn test_timeout_from_env_value() {
        assert_eq!(timeout_from_env(Some("2500")), Some(2_500));
        assert_eq!(timeout_from_env(Some(" 10 ")), Some(10));
        assert_eq!(timeout_from_env(Some("0")), None);
        assert_eq!(timeout_from_env(Some("soon")), None);
        assert_eq!(timeout_from_env(None), None);
    }

    #[test]
    fn test_with_url_overrides_one_fund() {
        let config = FetchConfig::default().with_url(Fund::Qqq, "http://localhost/qqq");
        assert_eq!(config.url_for(Fund::Qqq), "http://localhost/qqq");
        assert_eq!(config.url_for(Fund::Spy), SPY_URL);
    }
}
