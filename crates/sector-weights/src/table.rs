//! Sector name to SPDR sector ETF ticker lookup.

use std::collections::HashMap;

/// Default aliases. Several source labels map onto the same ticker.
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("Information Technology", "XLK"),
    ("Technology", "XLK"),
    ("Financials", "XLF"),
    ("Health Care", "XLV"),
    ("Consumer Discretionary", "XLY"),
    ("Communication Services", "XLC"),
    ("Telecommunications", "XLC"),
    ("Industrials", "XLI"),
    ("Consumer Staples", "XLP"),
    ("Energy", "XLE"),
    ("Materials", "XLB"),
    ("Basic Materials", "XLB"),
    ("Utilities", "XLU"),
    ("Real Estate", "XLRE"),
];

/// Immutable sector name to ticker map. Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct SectorTable {
    map: HashMap<String, String>,
}

impl SectorTable {
    /// Build a table from `(sector name, ticker)` pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(s, t)| (s.into(), t.into()))
            .collect();
        Self { map }
    }

    pub fn ticker_for(&self, sector: &str) -> Option<&str> {
        self.map.get(sector).map(String::as_str)
    }

    /// Every `(sector name, ticker)` entry, sorted by sector name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .map
            .iter()
            .map(|(s, t)| (s.as_str(), t.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Distinct tickers, sorted.
    pub fn tickers(&self) -> Vec<&str> {
        let mut tickers: Vec<&str> = self.map.values().map(String::as_str).collect();
        tickers.sort_unstable();
        tickers.dedup();
        tickers
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for SectorTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_ENTRIES.iter().copied())
    }
}
