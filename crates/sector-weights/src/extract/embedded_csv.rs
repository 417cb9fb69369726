//! Extract sector weights from a chart config embedded in a script block.
//!
//! The page carries `var options = {...};` where the object is plain JSON
//! and `data.csv` holds lines of `"Sector";weight`.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Result, SectorError};
use crate::types::SectorWeights;

fn options_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)var options = (\{.*?\});").expect("valid regex"))
}

/// Locate the embedded chart config, decode it and parse its CSV payload.
pub fn extract_embedded_csv(body: &str) -> Result<SectorWeights> {
    let raw = options_regex()
        .captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .ok_or(SectorError::PatternNotFound)?;

    tracing::debug!(bytes = raw.len(), "found embedded chart options");

    let options: Value = serde_json::from_str(raw)?;
    let csv = lookup_csv(&options)?;
    let weights = parse_csv(csv);

    tracing::debug!(sectors = weights.len(), "parsed embedded csv");
    Ok(weights)
}

fn lookup_csv(options: &Value) -> Result<&str> {
    let data = options.get("data").ok_or_else(|| SectorError::KeyLookup {
        key: "data".to_string(),
    })?;
    data.get("csv")
        .and_then(Value::as_str)
        .ok_or_else(|| SectorError::KeyLookup {
            key: "csv".to_string(),
        })
}

/// Parse `sector;weight` lines. Lines without `;` and lines with an empty
/// sector are skipped.
pub fn parse_csv(csv: &str) -> SectorWeights {
    let mut weights = SectorWeights::new();
    for line in csv.split('\n') {
        let Some((sector, weight)) = line.split_once(';') else {
            continue;
        };
        let sector = sector.trim_matches(|c: char| c == '"' || c.is_whitespace());
        if sector.is_empty() {
            continue;
        }
        weights.insert(sector, weight.trim());
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(options: &str) -> String {
        format!(
            "<html><body><script>\nvar options = {options};\n\
             Highcharts.chart('c', options);\n</script></body></html>"
        )
    }

    #[test]
    fn test_parse_csv_basic() {
        let w = parse_csv("Information Technology;25.5\nHealth Care;15.0\n");
        assert_eq!(w.len(), 2);
        assert_eq!(w.get("Information Technology"), Some("25.5"));
        assert_eq!(w.get("Health Care"), Some("15.0"));
    }

    #[test]
    fn test_parse_csv_strips_quotes_and_skips_noise() {
        let csv = concat!(
            "\"Sector\"\n",
            "\"Technology\"; 51.2 \r\n",
            "\n",
            "\"Consumer Discretionary\";19.1\n",
            "\"\";3\n",
        );
        let w = parse_csv(csv);
        let pairs: Vec<(&str, &str)> = w
            .iter()
            .map(|e| (e.sector.as_str(), e.weight.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("Technology", "51.2"), ("Consumer Discretionary", "19.1")]
        );
    }

    #[test]
    fn test_parse_csv_splits_on_first_semicolon() {
        let w = parse_csv("Energy;1.0;extra\n");
        assert_eq!(w.get("Energy"), Some("1.0;extra"));
    }

    #[test]
    fn test_extract_from_page() {
        let options = concat!(
            r#"{"chart":{"type":"pie"},"#,
            r#""data":{"csv":"\"Technology\";51.2\n\"Health Care\";6.1\n"}}"#,
        );
        let body = page(options);
        let w = extract_embedded_csv(&body).unwrap();
        assert_eq!(w.to_pairs_string(), "Technology:51.2,Health Care:6.1");
    }

    #[test]
    fn test_extract_spans_lines() {
        let body = page("{\n  \"data\": {\n    \"csv\": \"Energy;2.0\"\n  }\n}");
        let w = extract_embedded_csv(&body).unwrap();
        assert_eq!(w.get("Energy"), Some("2.0"));
    }

    #[test]
    fn test_pattern_absent() {
        let err = extract_embedded_csv("<html><body>nothing here</body></html>").unwrap_err();
        assert!(matches!(err, SectorError::PatternNotFound));
        assert_eq!(err.to_string(), "Data not found in the response.");
    }

    #[test]
    fn test_invalid_json() {
        let err = extract_embedded_csv(&page("{data: {csv: 'x'}}")).unwrap_err();
        assert!(matches!(err, SectorError::JsonDecode(_)));
        assert!(err.to_string().starts_with("Error decoding JSON: "));
    }

    #[test]
    fn test_missing_data_key() {
        let err = extract_embedded_csv(&page(r#"{"series":[]}"#)).unwrap_err();
        assert!(matches!(err, SectorError::KeyLookup { ref key } if key == "data"));
    }

    #[test]
    fn test_missing_csv_key() {
        let err = extract_embedded_csv(&page(r#"{"data":{"rows":[]}}"#)).unwrap_err();
        assert!(matches!(err, SectorError::KeyLookup { ref key } if key == "csv"));
    }
}
