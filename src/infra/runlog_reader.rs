// ============================================================
// Layer 6 — Run Log Reader
// ============================================================
// Loads a run log from disk. Three encodings are accepted:
//
//   1. JSON Lines, one Snapshot per line   → RunLog::Bare
//      (what the snapshot store writes)
//   2. A single JSON array of Snapshots    → RunLog::Bare
//   3. A single JSON object with a
//      "test_data" key                     → RunLog::Wrapped
//
// serde_json's StreamDeserializer reads the file as a
// sequence of top-level JSON values, which covers all three:
// a lone array or an object whose test_data is an array is a
// whole-file document, anything else is one snapshot per value.
// Snapshot fields are always tagged objects, so a snapshot
// with a field named test_data is never mistaken for a
// wrapped log.
//
// Reference: serde_json::StreamDeserializer documentation

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::{Result, SnapshotError};
use crate::domain::run_log::{RunLog, TEST_DATA_KEY};
use crate::domain::snapshot::Snapshot;
use crate::domain::traits::RunLogSource;

/// Load a run log exactly as stored.
pub fn load_runlog(path: impl AsRef<Path>) -> Result<RunLog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
    let format_err = |source| SnapshotError::Format { path: path.to_path_buf(), source };

    let mut docs: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&text)
        .into_iter::<serde_json::Value>()
        .collect::<std::result::Result<_, _>>()
        .map_err(format_err)?;

    let log = match docs.len() {
        0 => return Err(SnapshotError::EmptyRunLog(path.to_path_buf())),
        1 if is_whole_log(&docs[0]) => {
            let doc = docs.remove(0);
            serde_json::from_value::<RunLog>(doc).map_err(format_err)?
        }
        _ => {
            let snaps = docs
                .into_iter()
                .map(serde_json::from_value::<Snapshot>)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(format_err)?;
            RunLog::Bare(snaps)
        }
    };

    tracing::debug!(
        "Loaded {} snapshots from '{}'",
        log.test_data().len(),
        path.display()
    );
    Ok(log)
}

/// Load just the snapshot list, whichever form the log is in.
pub fn load_test_data(path: impl AsRef<Path>) -> Result<Vec<Snapshot>> {
    load_runlog(path).map(RunLog::into_test_data)
}

/// Write `log`, replacing any existing file.
///
/// A bare log is written as JSON Lines, the same layout the
/// snapshot store appends to. A wrapped log is one JSON
/// document so its metadata survives. Either is read back by
/// `load_runlog` as the same variant.
pub fn save_runlog(path: impl AsRef<Path>, log: &RunLog) -> Result<()> {
    let path = path.as_ref();
    if let RunLog::Bare(snaps) = log {
        if snaps.is_empty() {
            return Err(SnapshotError::EmptyRunLog(path.to_path_buf()));
        }
    }

    let file = fs::File::create(path).map_err(|e| SnapshotError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match log {
        RunLog::Bare(snaps) => {
            for snap in snaps {
                serde_json::to_writer(&mut writer, snap)?;
                writer.write_all(b"\n").map_err(|e| SnapshotError::io(path, e))?;
            }
        }
        RunLog::Wrapped { .. } => {
            serde_json::to_writer(&mut writer, log)?;
            writer.write_all(b"\n").map_err(|e| SnapshotError::io(path, e))?;
        }
    }
    writer.flush().map_err(|e| SnapshotError::io(path, e))?;

    tracing::debug!("Saved run log to '{}'", path.display());
    Ok(())
}

/// A single document is the whole log when it is an array,
/// or an object whose test_data is the snapshot list.
fn is_whole_log(doc: &serde_json::Value) -> bool {
    doc.is_array()
        || doc
            .get(TEST_DATA_KEY)
            .is_some_and(serde_json::Value::is_array)
}

/// A run log file on disk
#[derive(Debug, Clone)]
pub struct RunLogFile {
    path: PathBuf,
}

impl RunLogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunLogSource for RunLogFile {
    fn load(&self) -> Result<RunLog> {
        load_runlog(&self.path)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::Value;
    use crate::infra::logdir::runlog_path;
    use crate::infra::snapshot_store::store_snapshot;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn snaps() -> Vec<Snapshot> {
        (0..3).map(|e| Snapshot::new().with("enum", e as i64)).collect()
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_runlog(tmp.path().join("snap_0.jsonl")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("snap_0.jsonl");
        fs::write(&path, "").unwrap();
        assert!(matches!(load_runlog(&path), Err(SnapshotError::EmptyRunLog(_))));
    }

    #[test]
    fn test_truncated_line_is_format_error() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("snap_0.jsonl");
        fs::write(&path, "{\"enum\":{\"int\":0}}\n{\"enum\":{\"in").unwrap();
        assert!(matches!(load_runlog(&path), Err(SnapshotError::Format { .. })));
    }

    #[test]
    fn test_single_jsonl_line_is_bare_log() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("snap_0.jsonl");
        fs::write(&path, "{\"enum\":{\"int\":0}}\n").unwrap();

        let log = load_runlog(&path).unwrap();
        assert_eq!(log, RunLog::Bare(vec![Snapshot::new().with("enum", 0_i64)]));
    }

    #[test]
    fn test_json_array_is_bare_log() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("bare.json");
        fs::write(&path, serde_json::to_string(&snaps()).unwrap()).unwrap();

        assert_eq!(load_runlog(&path).unwrap(), RunLog::Bare(snaps()));
    }

    #[test]
    fn test_snapshot_with_test_data_field_stays_a_snapshot() {
        let tmp  = TempDir::new().unwrap();
        let snap = Snapshot::new().with("enum", 0_i64).with(TEST_DATA_KEY, 5_i64);
        let path = store_snapshot(tmp.path(), &snap, 0).unwrap();

        assert_eq!(load_runlog(&path).unwrap(), RunLog::Bare(vec![snap]));
    }

    #[test]
    fn test_saved_bare_log_accepts_appends() {
        let tmp  = TempDir::new().unwrap();
        let path = runlog_path(tmp.path(), 0);
        save_runlog(&path, &RunLog::Bare(snaps())).unwrap();
        assert_eq!(load_runlog(&path).unwrap(), RunLog::Bare(snaps()));

        let next = Snapshot::new().with("enum", 3_i64);
        store_snapshot(tmp.path(), &next, 0).unwrap();

        let mut expected = snaps();
        expected.push(next);
        assert_eq!(load_test_data(&path).unwrap(), expected);
    }

    #[test]
    fn test_saving_empty_bare_log_is_rejected() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("snap_0.jsonl");
        let err  = save_runlog(&path, &RunLog::Bare(Vec::new())).unwrap_err();

        assert!(matches!(err, SnapshotError::EmptyRunLog(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_wrapped_log_keeps_metadata() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("wrapped.jsonl");

        let mut metadata = BTreeMap::new();
        metadata.insert("lr".to_string(), Value::Float(0.5));
        let log = RunLog::Wrapped { test_data: snaps(), metadata };
        save_runlog(&path, &log).unwrap();

        assert_eq!(load_runlog(&path).unwrap(), log);
        assert_eq!(load_test_data(&path).unwrap(), snaps());
    }

    #[test]
    fn test_repeated_reads_are_equal() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("wrapped.jsonl");
        save_runlog(&path, &RunLog::wrapped(snaps())).unwrap();

        let source = RunLogFile::new(&path);
        assert_eq!(source.load().unwrap(), source.load().unwrap());
    }
}
