// ============================================================
// Layer 3 — Run Log Domain Type
// ============================================================
// A Run Log is the ordered list of Snapshots for one training
// run. Two shapes exist in the wild:
//
//   Bare:     [snap_0, snap_1, ...]
//   Wrapped:  {"test_data": [snap_0, ...], "<meta>": ..., ...}
//
// Both are accepted everywhere; `test_data()` hides the
// difference from the projection functions.
//
// Reference: serde untagged + flatten representations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::snapshot::{Snapshot, Value};

/// Key holding the snapshot list in a wrapped run log
pub const TEST_DATA_KEY: &str = "test_data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunLog {
    /// Snapshot list stored under `test_data` next to other metadata
    Wrapped {
        test_data: Vec<Snapshot>,
        #[serde(flatten)]
        metadata:  BTreeMap<String, Value>,
    },

    /// The snapshot list on its own
    Bare(Vec<Snapshot>),
}

impl RunLog {
    /// Wrap a snapshot list with no extra metadata
    pub fn wrapped(test_data: Vec<Snapshot>) -> Self {
        RunLog::Wrapped { test_data, metadata: BTreeMap::new() }
    }

    pub fn test_data(&self) -> &[Snapshot] {
        match self {
            RunLog::Wrapped { test_data, .. } => test_data,
            RunLog::Bare(snaps) => snaps,
        }
    }

    pub fn into_test_data(self) -> Vec<Snapshot> {
        match self {
            RunLog::Wrapped { test_data, .. } => test_data,
            RunLog::Bare(snaps) => snaps,
        }
    }

    /// Top-level metadata; always empty for a bare log
    pub fn metadata(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            RunLog::Wrapped { metadata, .. } => Some(metadata),
            RunLog::Bare(_) => None,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn snaps() -> Vec<Snapshot> {
        vec![
            Snapshot::new().with("enum", 0_i64),
            Snapshot::new().with("enum", 1_i64),
        ]
    }

    #[test]
    fn test_array_parses_as_bare() {
        let json = serde_json::to_string(&snaps()).unwrap();
        let log: RunLog = serde_json::from_str(&json).unwrap();
        assert!(matches!(log, RunLog::Bare(_)));
        assert_eq!(log.test_data(), snaps().as_slice());
    }

    #[test]
    fn test_object_parses_as_wrapped_with_metadata() {
        let mut metadata = BTreeMap::new();
        metadata.insert("model".to_string(), Value::from("xor"));
        let log = RunLog::Wrapped { test_data: snaps(), metadata };

        let json = serde_json::to_string(&log).unwrap();
        let back: RunLog = serde_json::from_str(&json).unwrap();

        assert_eq!(back, log);
        assert_eq!(back.metadata().unwrap()["model"], Value::from("xor"));
        assert_eq!(back.into_test_data().len(), 2);
    }
}
