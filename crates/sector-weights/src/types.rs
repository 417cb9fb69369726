//! Core data types: sector/weight entries, the ordered mapping, and funds.

use crate::extract::SourceKind;

/// One `(sector, weight)` pair as read from a source page.
///
/// The weight is kept as text with any `%` already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorWeight {
    pub sector: String,
    pub weight: String,
}

/// Sector name to weight, in the order sectors were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorWeights {
    entries: Vec<SectorWeight>,
}

impl SectorWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a weight. A repeated sector keeps its position and takes the
    /// latest weight.
    pub fn insert(&mut self, sector: impl Into<String>, weight: impl Into<String>) {
        let sector = sector.into();
        let weight = weight.into();
        match self.entries.iter_mut().find(|e| e.sector == sector) {
            Some(existing) => existing.weight = weight,
            None => self.entries.push(SectorWeight { sector, weight }),
        }
    }

    pub fn get(&self, sector: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.sector == sector)
            .map(|e| e.weight.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectorWeight> {
        self.entries.iter()
    }

    /// Format as `sector:weight` tokens joined by `,`, the input format of
    /// [`crate::normalize`].
    pub fn to_pairs_string(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}:{}", e.sector, e.weight))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<S: Into<String>, W: Into<String>> FromIterator<(S, W)> for SectorWeights {
    fn from_iter<I: IntoIterator<Item = (S, W)>>(iter: I) -> Self {
        let mut weights = SectorWeights::new();
        for (sector, weight) in iter {
            weights.insert(sector, weight);
        }
        weights
    }
}

/// The funds whose sector breakdown can be retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fund {
    Spy,
    Qqq,
}

impl Fund {
    /// Parse user input: surrounding whitespace is ignored and matching is
    /// case-insensitive. Anything but SPY or QQQ yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "SPY" => Some(Fund::Spy),
            "QQQ" => Some(Fund::Qqq),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Fund::Spy => "SPY",
            Fund::Qqq => "QQQ",
        }
    }

    /// Which page layout this fund's source uses.
    pub fn source_kind(&self) -> SourceKind {
        match self {
            Fund::Spy => SourceKind::HtmlTable,
            Fund::Qqq => SourceKind::EmbeddedCsv,
        }
    }
}

impl std::fmt::Display for Fund {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
