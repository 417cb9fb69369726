//! Page extractors that turn a fetched body into [`SectorWeights`].
//!
//! Each upstream page has its own layout. Extraction is all-or-nothing:
//! either a full mapping is returned or an error describing why the
//! expected data was not found.

pub mod embedded_csv;
pub mod html_table;

pub use embedded_csv::extract_embedded_csv;
pub use html_table::extract_html_table;

use crate::error::Result;
use crate::types::SectorWeights;

/// Layout of an upstream page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A `var options = {...};` chart config carrying CSV under `data.csv`.
    EmbeddedCsv,
    /// An HTML treemap data table with `sector | weight%` rows.
    HtmlTable,
}

impl SourceKind {
    pub fn extract(&self, body: &str) -> Result<SectorWeights> {
        match self {
            SourceKind::EmbeddedCsv => extract_embedded_csv(body),
            SourceKind::HtmlTable => extract_html_table(body),
        }
    }
}
