//! Error type shared by fetching, extraction and normalization.

/// All errors that can occur while producing a sector summary.
#[derive(thiserror::Error, Debug)]
pub enum SectorError {
    #[error("HTTP error: {status} for url {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Data not found in the response.")]
    PatternNotFound,

    #[error("Error decoding JSON: {0}")]
    JsonDecode(#[from] serde_json::Error),

    #[error("Key error: '{key}'")]
    KeyLookup { key: String },

    /// The sector table could not be located in the fetched page.
    #[error("Sector table not found in the response (selector `{selector}`).")]
    StructuralElementMissing { selector: String },

    /// A `name:weight` token without exactly one `:`.
    #[error("Malformed sector entry: {token:?}")]
    Format { token: String },
}

impl SectorError {
    /// Network failures abort the run; everything else is reported and the
    /// run ends normally.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SectorError::HttpStatus { .. } | SectorError::Request(_))
    }
}

pub type Result<T> = std::result::Result<T, SectorError>;
