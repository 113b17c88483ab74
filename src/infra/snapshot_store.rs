// ============================================================
// Layer 6 — Snapshot Store
// ============================================================
// Appends snapshots to a run's log file.
//
// Format: JSON Lines, one serialised Snapshot per line.
//
//   snap_0.jsonl
//     {"enum":{"int":0},"input":{...},...}
//     {"enum":{"int":1},"input":{...},...}
//
// Appending never re-reads or rewrites earlier snapshots,
// so the cost of a store does not grow with the run.
//
// Each append takes an exclusive advisory lock (fs2) on the
// file and writes the whole line with one write_all, so two
// writers on the same run index can never interleave or
// drop each other's snapshots.
//
// Reference: Rust Book §12 (I/O and File Handling)
//            fs2 crate documentation (FileExt)

use fs2::FileExt;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::error::{Result, SnapshotError};
use crate::domain::snapshot::Snapshot;
use crate::domain::traits::SnapshotSink;
use crate::infra::logdir::runlog_path;

/// Append `snapshot` to `<logdir>/snap_<run_index>.jsonl`,
/// creating the file on first use. Returns the run log path.
pub fn store_snapshot(
    logdir:    impl AsRef<Path>,
    snapshot:  &Snapshot,
    run_index: usize,
) -> Result<PathBuf> {
    let path = runlog_path(logdir, run_index);
    append_line(&path, snapshot)?;
    Ok(path)
}

fn append_line(path: &Path, snapshot: &Snapshot) -> Result<()> {
    // Serialise before touching the file so an encode error
    // leaves the log untouched
    let mut line = serde_json::to_vec(snapshot)?;
    line.push(b'\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SnapshotError::io(path, e))?;

    file.lock_exclusive().map_err(|e| SnapshotError::io(path, e))?;

    let written = file.write_all(&line).and_then(|()| file.flush());

    // Closing the handle releases the lock too
    FileExt::unlock(&file).map_err(|e| SnapshotError::io(path, e))?;
    written.map_err(|e| SnapshotError::io(path, e))?;

    tracing::debug!("Appended snapshot ({} bytes) to '{}'", line.len(), path.display());
    Ok(())
}

/// The run log of one run index inside one log directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    logdir:    PathBuf,
    run_index: usize,
}

impl SnapshotStore {
    pub fn new(logdir: impl Into<PathBuf>, run_index: usize) -> Self {
        Self { logdir: logdir.into(), run_index }
    }

    pub fn logdir(&self) -> &Path {
        &self.logdir
    }

    pub fn run_index(&self) -> usize {
        self.run_index
    }

    /// Where this store's snapshots end up
    pub fn path(&self) -> PathBuf {
        runlog_path(&self.logdir, self.run_index)
    }
}

impl SnapshotSink for SnapshotStore {
    fn append(&self, snapshot: &Snapshot) -> Result<()> {
        store_snapshot(&self.logdir, snapshot, self.run_index).map(|_| ())
    }
}
