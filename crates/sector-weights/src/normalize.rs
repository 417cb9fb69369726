//! Translate `sector:weight` tokens into `ticker:weight` tokens.

use crate::error::{Result, SectorError};
use crate::table::SectorTable;

/// Normalize a comma-separated list of `name:weight` tokens.
///
/// Names are trimmed and looked up exactly in `table`. Unknown sectors are
/// dropped without a warning; known ones are re-emitted as `ticker:weight`
/// in input order. Aliases of one ticker are not merged, so the same ticker
/// may appear more than once. The weight is passed through untouched.
///
/// A token without exactly one `:` fails with [`SectorError::Format`].
pub fn normalize(input: &str, table: &SectorTable) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let mut out = Vec::new();
    for token in input.split(',') {
        let (name, weight) = split_token(token)?;
        match table.ticker_for(name.trim()) {
            Some(ticker) => out.push(format!("{ticker}:{weight}")),
            None => tracing::trace!(sector = name.trim(), "no ticker for sector, dropped"),
        }
    }

    Ok(out.join(","))
}

fn split_token(token: &str) -> Result<(&str, &str)> {
    match token.split_once(':') {
        Some((name, weight)) if !weight.contains(':') => Ok((name, weight)),
        _ => Err(SectorError::Format {
            token: token.to_string(),
        }),
    }
}
