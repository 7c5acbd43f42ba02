use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{AppError, DataError};

/// A parsed snapshot document: a JSON object whose entries are named embedded
/// datasets and per-service snapshot records.
#[derive(Debug)]
pub struct SnapshotDocument {
    root: Map<String, Value>,
}

impl SnapshotDocument {
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DataError::NotADocument.into()),
        }
    }

    pub fn parse(text: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(text).map_err(DataError::Parse)?;
        Self::from_value(value)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|source| DataError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.root.contains_key(id)
    }

    pub fn dataset_ids(&self) -> Vec<&str> {
        self.root.keys().map(String::as_str).collect()
    }

    /// Take the record array embedded under `id`, removing it from the
    /// document. The payload is consumed exactly once; a second take of the
    /// same id fails with `DatasetNotFound`.
    pub fn take_records(&mut self, id: &str) -> Result<Vec<Map<String, Value>>, AppError> {
        let value = self
            .root
            .remove(id)
            .ok_or_else(|| DataError::DatasetNotFound { id: id.to_string() })?;

        let items = match value {
            Value::Array(items) => items,
            _ => return Err(DataError::DatasetNotArray { id: id.to_string() }.into()),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(DataError::RecordNotObject {
                    id: id.to_string(),
                    index,
                }
                .into()),
            })
            .collect()
    }

    /// One summary row per service entry, sorted alphabetically by name.
    pub fn service_summaries(&self) -> Vec<ServiceSummary> {
        let mut summaries: Vec<ServiceSummary> = self
            .root
            .iter()
            .filter_map(|(name, value)| {
                let service = value.as_object()?;
                Some(ServiceSummary {
                    name: name.clone(),
                    uptime_ms: service
                        .get("info")
                        .and_then(|info| info.get("uptime"))
                        .and_then(Value::as_u64),
                    attribute_count: service
                        .get("last-snapshot")
                        .and_then(Value::as_object)
                        .map(Map::len)
                        .unwrap_or(0),
                })
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}

/// Condensed view of one running service instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSummary {
    pub name: String,
    pub uptime_ms: Option<u64>,
    pub attribute_count: usize,
}

impl ServiceSummary {
    pub fn uptime_display(&self) -> String {
        match self.uptime_ms {
            Some(ms) => format!("up {}", format_uptime(ms)),
            None => "-".to_string(),
        }
    }
}

/// Bucket an uptime in milliseconds into minutes, hours, or days.
pub fn format_uptime(ms: u64) -> String {
    let minutes = ms as f64 / 60_000.0;
    if minutes < 60.0 {
        format!("{}m", minutes.round())
    } else if minutes < 1_440.0 {
        format!("{}h", (minutes / 60.0).round())
    } else {
        format!("{}d", (minutes / 1_440.0).round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_records_consumes_the_source() {
        let mut doc = SnapshotDocument::from_value(json!({
            "instances": [{"name": "a"}, {"name": "b"}],
        }))
        .unwrap();

        let records = doc.take_records("instances").unwrap();
        assert_eq!(records.len(), 2);
        assert!(!doc.contains("instances"));

        let err = doc.take_records("instances").unwrap_err();
        assert!(matches!(
            err,
            AppError::Data(DataError::DatasetNotFound { .. })
        ));
    }

    #[test]
    fn test_take_records_rejects_bad_shapes() {
        let mut doc = SnapshotDocument::from_value(json!({
            "scalar": 7,
            "mixed": [{"ok": 1}, "nope"],
        }))
        .unwrap();

        assert!(matches!(
            doc.take_records("scalar").unwrap_err(),
            AppError::Data(DataError::DatasetNotArray { .. })
        ));
        assert!(matches!(
            doc.take_records("mixed").unwrap_err(),
            AppError::Data(DataError::RecordNotObject { index: 1, .. })
        ));
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(SnapshotDocument::parse("[1,2,3]").is_err());
        assert!(SnapshotDocument::parse("{\"a\": []}").is_ok());
    }

    #[test]
    fn test_service_summaries_sorted_by_name() {
        let doc = SnapshotDocument::from_value(json!({
            "relay": {"info": {"uptime": 90_000}, "last-snapshot": {"a": 1, "b": 2}},
            "broker": {"info": {"uptime": 7_200_000}, "last-snapshot": {}},
        }))
        .unwrap();

        let summaries = doc.service_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "broker");
        assert_eq!(summaries[0].uptime_display(), "up 2h");
        assert_eq!(summaries[1].name, "relay");
        assert_eq!(summaries[1].uptime_display(), "up 2m");
        assert_eq!(summaries[1].attribute_count, 2);
    }

    #[test]
    fn test_format_uptime_buckets() {
        assert_eq!(format_uptime(30_000), "1m");
        assert_eq!(format_uptime(59 * 60_000), "59m");
        assert_eq!(format_uptime(3 * 60 * 60_000), "3h");
        assert_eq!(format_uptime(2 * 24 * 60 * 60_000), "2d");
    }
}
