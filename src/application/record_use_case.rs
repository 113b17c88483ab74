// ============================================================
// Layer 2 — Record Use Case
// ============================================================
// The writer side of a training run:
//
//   Step 1: allocate a fresh log directory      (once)
//   Step 2: point a snapshot store at run index  (once)
//   Step 3: record a snapshot                    (every epoch)
//
// The recorder is generic over SnapshotSink so tests (and
// callers that only want in-memory logs) can swap the store.
//
// Reference: Rust Book §10 (Generic Types and Traits)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::application::config::SnaplogConfig;
use crate::domain::snapshot::Snapshot;
use crate::domain::traits::SnapshotSink;
use crate::infra::{logdir::new_logdir_in, snapshot_store::SnapshotStore};

pub struct SnapshotRecorder<S: SnapshotSink> {
    sink:     S,
    recorded: usize,
}

impl SnapshotRecorder<SnapshotStore> {
    /// Allocate a new log directory under the configured root
    /// and record into `snap_<run_index>.jsonl` inside it.
    pub fn create(config: &SnaplogConfig, run_index: usize) -> Result<Self> {
        let logdir = new_logdir_in(&config.logdir_root).with_context(|| {
            format!(
                "Cannot allocate a log directory under '{}'",
                config.logdir_root.display()
            )
        })?;

        tracing::info!("Recording run {} into '{}'", run_index, logdir.display());
        Ok(Self::new(SnapshotStore::new(logdir, run_index)))
    }

    pub fn logdir(&self) -> &Path {
        self.sink.logdir()
    }

    pub fn runlog_path(&self) -> PathBuf {
        self.sink.path()
    }
}

impl<S: SnapshotSink> SnapshotRecorder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, recorded: 0 }
    }

    /// Hand a snapshot over to the sink.
    pub fn record(&mut self, snapshot: Snapshot) -> Result<()> {
        self.sink
            .append(&snapshot)
            .with_context(|| format!("Cannot record snapshot #{}", self.recorded))?;

        self.recorded += 1;
        tracing::debug!("Recorded snapshot #{}", self.recorded);
        Ok(())
    }

    /// Number of snapshots recorded so far
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result as SnapResult, SnapshotError};
    use crate::infra::runlog_reader::load_test_data;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Keeps appended snapshots in memory
    #[derive(Default)]
    struct MemorySink {
        snaps: RefCell<Vec<Snapshot>>,
    }

    impl SnapshotSink for MemorySink {
        fn append(&self, snapshot: &Snapshot) -> SnapResult<()> {
            self.snaps.borrow_mut().push(snapshot.clone());
            Ok(())
        }
    }

    /// Rejects every snapshot
    struct FailingSink;

    impl SnapshotSink for FailingSink {
        fn append(&self, _: &Snapshot) -> SnapResult<()> {
            Err(SnapshotError::MissingKey("enum".into()))
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut rec = SnapshotRecorder::new(MemorySink::default());
        for epoch in 0..3_i64 {
            rec.record(Snapshot::new().with("enum", epoch)).unwrap();
        }

        assert_eq!(rec.recorded(), 3);
        let epochs: Vec<i64> = rec.sink().snaps.borrow().iter().map(|s| s.epoch().unwrap()).collect();
        assert_eq!(epochs, vec![0, 1, 2]);
    }

    #[test]
    fn test_failed_record_is_not_counted() {
        let mut rec = SnapshotRecorder::new(FailingSink);
        assert!(rec.record(Snapshot::new()).is_err());
        assert_eq!(rec.recorded(), 0);
    }

    #[test]
    fn test_create_allocates_logdir_and_writes_run_log() {
        let tmp = TempDir::new().unwrap();
        let cfg = SnaplogConfig {
            logdir_root: tmp.path().join("logdirs"),
            ..SnaplogConfig::default()
        };

        let mut first = SnapshotRecorder::create(&cfg, 2).unwrap();
        first.record(Snapshot::new().with("enum", 0_i64)).unwrap();
        let second = SnapshotRecorder::create(&cfg, 2).unwrap();

        assert_eq!(first.logdir(), tmp.path().join("logdirs").join("logdir_000"));
        assert_eq!(second.logdir(), tmp.path().join("logdirs").join("logdir_001"));
        assert!(first.runlog_path().ends_with("snap_2.jsonl"));
        assert_eq!(load_test_data(first.runlog_path()).unwrap().len(), 1);
    }
}
