//! Event ingest
//!
//! Reads a JSON array of event records. Individual records that cannot be
//! decoded (unknown `type`, not an object, wrong shape) are skipped and
//! reported instead of failing the whole document; only a document that is
//! not a JSON array is an error.

use std::fs;
use std::path::Path;

use schemars::schema::RootSchema;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AnalysisError, Result};
use crate::events::MatchEvent;

/// A record that was dropped during ingest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position in the input array
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    pub events: Vec<MatchEvent>,
    pub skipped: Vec<SkippedRecord>,
}

impl IngestReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Decode a JSON array of event records
pub fn parse_events(json: &str) -> Result<IngestReport> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Array(records) = root else {
        return Err(AnalysisError::InvalidInput(format!(
            "expected a JSON array of events, found {}",
            value_kind(&root)
        )));
    };

    let mut report = IngestReport { events: Vec::with_capacity(records.len()), skipped: Vec::new() };
    for (index, record) in records.into_iter().enumerate() {
        match decode_record(index, record) {
            Ok(event) => report.events.push(event),
            Err(err) => {
                warn!(%err, "skipping event record");
                let reason = match err {
                    AnalysisError::InvalidEvent { reason, .. } => reason,
                    other => other.to_string(),
                };
                report.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    debug!(events = report.events.len(), skipped = report.skipped.len(), "ingest complete");
    Ok(report)
}

/// Read and decode an event file
pub fn load_events(path: &Path) -> Result<IngestReport> {
    let content = fs::read_to_string(path)?;
    parse_events(&content)
}

fn decode_record(index: usize, record: Value) -> Result<MatchEvent> {
    if !record.is_object() {
        return Err(AnalysisError::InvalidEvent {
            index,
            reason: format!("expected an object, found {}", value_kind(&record)),
        });
    }
    serde_json::from_value(record).map_err(|e| AnalysisError::InvalidEvent { index, reason: e.to_string() })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON schema of the accepted event document
pub fn event_schema() -> RootSchema {
    schemars::schema_for!(Vec<MatchEvent>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"type":"pass","minute":10,"x":70,"y":50,"targetX":90,"targetY":50,"success":true},
        {"type":"foul","minute":11,"x":40,"y":40},
        42,
        {"type":"shot","minute":10,"x":90,"y":50,"isGoal":true,"success":true},
        {"minute":12,"x":1,"y":1}
    ]"#;

    #[test]
    fn test_skips_bad_records_and_keeps_order() {
        let report = parse_events(SAMPLE).unwrap();
        let kinds: Vec<EventKind> = report.events.iter().map(MatchEvent::kind).collect();
        assert_eq!(kinds, vec![EventKind::Pass, EventKind::Shot]);

        let skipped: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 2, 4]);
        assert!(report.skipped[1].reason.contains("a number"));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_empty_array_is_fine() {
        let report = parse_events("[]").unwrap();
        assert!(report.events.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        let err = parse_events(r#"{"events":[]}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert!(!err.is_recoverable());

        let err = parse_events("not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }

    #[test]
    fn test_load_events_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let report = load_events(file.path()).unwrap();
        assert_eq!(report.events.len(), 2);

        let missing = load_events(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(missing, AnalysisError::Io(_)));
    }

    #[test]
    fn test_schema_names_event_types() {
        let schema = serde_json::to_string(&event_schema()).unwrap();
        for tag in ["pass", "shot", "dribble", "interception", "tackle"] {
            assert!(schema.contains(&format!("\"{tag}\"")), "schema is missing {tag}");
        }
    }
}
