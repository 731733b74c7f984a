//! Raw listing records as they arrive from the document store.
//!
//! Records are loosely-typed JSON objects; no field is guaranteed. Helpers
//! here never fail on a malformed record, only on unreadable input.

use std::{fs, path::Path};

use itertools::Itertools;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    Result,
    normalize::scalar_text,
    registry::{FieldPath, first_present},
};

static ID_FIELDS: [FieldPath; 3] = [
    FieldPath::Top("id"),
    FieldPath::Top("_id"),
    FieldPath::Top("docId"),
];

static TITLE_FIELDS: [FieldPath; 2] = [FieldPath::Top("title"), FieldPath::Top("name")];

static DESCRIPTION_FIELDS: [FieldPath; 3] = [
    FieldPath::Top("description"),
    FieldPath::Top("desc"),
    FieldPath::Top("details"),
];

/// Load listing records from a file holding either one JSON array or one
/// JSON object per line.
#[instrument(name = "Load listings", level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_listings(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path.as_ref())?;

    let records = parse_listings(&content)?;
    info!(records = records.len(), "Loaded listing records");
    Ok(records)
}

/// Parse listing records from a JSON array or newline-delimited JSON.
///
/// Elements that are not JSON objects are skipped.
pub fn parse_listings(content: &str) -> Result<Vec<Value>> {
    let trimmed = content.trim_start();
    let values = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<Value>>(trimmed)?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(serde_json::from_str::<Value>)
            .collect::<serde_json::Result<Vec<_>>>()?
    };

    let total = values.len();
    let records = values.into_iter().filter(Value::is_object).collect_vec();
    if records.len() < total {
        warn!(
            skipped = total - records.len(),
            "Skipped listing entries that are not objects"
        );
    }
    Ok(records)
}

/// Stable identifier of a record: its `id`, `_id` or `docId` field, else the
/// record's position in the batch.
#[must_use]
pub fn listing_id(record: &Value, position: usize) -> String {
    first_present(&ID_FIELDS, record).unwrap_or_else(|| position.to_string())
}

/// Title and description joined into one text blob for detection.
#[must_use]
pub fn listing_text(record: &Value) -> String {
    [
        first_present(&TITLE_FIELDS, record),
        first_present(&DESCRIPTION_FIELDS, record),
    ]
    .into_iter()
    .flatten()
    .join(" ")
}

/// Read a numeric field that may be stored as a number or numeric string.
#[must_use]
pub fn number_field(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(_) => scalar_text(value)?.parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_json_array_skips_non_objects() {
        let records = parse_listings(r#"[{"id": "a"}, 3, null, {"id": "b"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(listing_id(&records[1], 1), "b");
    }

    #[test]
    fn test_parse_ndjson() {
        let content = "{\"id\": 1, \"title\": \"x\"}\n\n  {\"id\": 2}\n";
        let records = parse_listings(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(listing_id(&records[0], 0), "1");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_listings("{\"id\": 1\n").is_err());
        assert!(parse_listings("[{\"id\": 1}").is_err());
    }

    #[test]
    fn test_load_listings_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{"id": "x1", "title": "شقة للإيجار"}}]"#).unwrap();
        let records = load_listings(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(listing_text(&records[0]), "شقة للإيجار");
    }

    #[test]
    fn test_listing_id_falls_back_to_position() {
        assert_eq!(listing_id(&json!({"_id": "doc-9"}), 4), "doc-9");
        assert_eq!(listing_id(&json!({"id": null}), 4), "4");
        assert_eq!(listing_id(&json!({}), 7), "7");
    }

    #[test]
    fn test_listing_text_joins_title_and_description() {
        let record = json!({"title": "Toyota", "description": "  clean  "});
        assert_eq!(listing_text(&record), "Toyota clean");
        assert_eq!(listing_text(&json!({"desc": "only desc"})), "only desc");
        assert_eq!(listing_text(&json!({"title": 5})), "5");
        assert_eq!(listing_text(&json!({})), "");
    }

    #[test]
    fn test_number_field() {
        assert_eq!(number_field(&json!(15.37)), Some(15.37));
        assert_eq!(number_field(&json!(" 44.19 ")), Some(44.19));
        assert_eq!(number_field(&json!("abc")), None);
        assert_eq!(number_field(&json!("NaN")), None);
        assert_eq!(number_field(&json!(null)), None);
    }
}
