// ============================================================
// Layer 6 — Log Directory Allocator
// ============================================================
// Every training run gets its own fresh directory:
//
//   logdirs/
//     logdir_000/
//       snap_0.jsonl   ← run log for run index 0
//       snap_1.jsonl
//     logdir_001/
//     ...
//
// The next free name is a pure function of what is already
// on disk, so there is no process-wide counter to keep in
// sync. Creation uses `create_dir` (not `create_dir_all`) for
// the final component, which fails if another process won
// the same name; we then re-list and try again.
//
// Reference: Rust Book §12 (I/O), std::fs documentation

use std::{
    collections::HashSet,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::domain::error::{Result, SnapshotError};

/// Directory under the working directory holding all log dirs
pub const LOGDIR_ROOT:   &str = "logdirs";
pub const LOGDIR_PREFIX: &str = "logdir_";

/// File extension of run logs written by the snapshot store
pub const RUNLOG_EXTENSION: &str = "jsonl";

/// Format the log directory name for a counter value.
/// Three digits, zero-padded; wider once the counter passes 999.
pub fn logdir_name(counter: usize) -> String {
    format!("{LOGDIR_PREFIX}{counter:03}")
}

/// First `logdir_NNN` name not present in `existing`.
///
/// # Example
/// ```
/// use ffbp_snaplog::infra::logdir::next_logdir_name;
/// assert_eq!(next_logdir_name(&["logdir_000", "logdir_001"]), "logdir_002");
/// ```
pub fn next_logdir_name<S: AsRef<str>>(existing: &[S]) -> String {
    let taken: HashSet<&str> = existing.iter().map(AsRef::as_ref).collect();
    (0..)
        .map(logdir_name)
        .find(|name| !taken.contains(name.as_str()))
        .unwrap_or_else(|| logdir_name(existing.len()))
}

/// Allocate a new log directory under `<cwd>/logdirs`.
pub fn new_logdir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| SnapshotError::io(".", e))?;
    new_logdir_in(cwd.join(LOGDIR_ROOT))
}

/// Allocate and create a new log directory under `root`.
/// The root (and its parents) are created if missing.
pub fn new_logdir_in(root: impl AsRef<Path>) -> Result<PathBuf> {
    let root = root.as_ref();
    fs::create_dir_all(root).map_err(|e| SnapshotError::io(root, e))?;

    loop {
        let existing = list_dir_names(root)?;
        let logdir   = root.join(next_logdir_name(&existing));

        match fs::create_dir(&logdir) {
            Ok(()) => {
                tracing::info!("Created log directory '{}'", logdir.display());
                return Ok(logdir);
            }
            // Lost a race for this name; re-list and pick again
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!("'{}' appeared concurrently, retrying", logdir.display());
            }
            Err(e) => return Err(SnapshotError::io(logdir, e)),
        }
    }
}

/// Deterministic run log path for a run index inside a log directory.
pub fn runlog_path(logdir: impl AsRef<Path>, run_index: usize) -> PathBuf {
    logdir
        .as_ref()
        .join(format!("snap_{run_index}.{RUNLOG_EXTENSION}"))
}

/// A run log file found in a log directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLogEntry {
    /// Bare file name, e.g. `snap_0.jsonl`
    pub file_name: String,

    /// Full path to the file
    pub path: PathBuf,
}

/// All run log files in `logdir`, sorted by file name.
pub fn list_runlogs(logdir: impl AsRef<Path>) -> Result<Vec<RunLogEntry>> {
    let logdir = logdir.as_ref();
    let mut entries = Vec::new();

    for entry in fs::read_dir(logdir).map_err(|e| SnapshotError::io(logdir, e))? {
        let entry = entry.map_err(|e| SnapshotError::io(logdir, e))?;
        let path  = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some(RUNLOG_EXTENSION) {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(file_name) => entries.push(RunLogEntry { file_name, path }),
            Err(raw) => tracing::warn!("Skipping non UTF-8 file name {:?}", raw),
        }
    }

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!("Found {} run logs in '{}'", entries.len(), logdir.display());
    Ok(entries)
}

/// Names of everything currently inside `dir`
fn list_dir_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SnapshotError::io(dir, e))? {
        let entry = entry.map_err(|e| SnapshotError::io(dir, e))?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_name_is_000() {
        let none: [&str; 0] = [];
        assert_eq!(next_logdir_name(&none), "logdir_000");
    }

    #[test]
    fn test_fills_gaps_in_listing() {
        let existing = ["logdir_000", "logdir_002", "notes.txt"];
        assert_eq!(next_logdir_name(&existing), "logdir_001");
    }

    #[test]
    fn test_counter_widens_past_999() {
        let existing: Vec<String> = (0..1000).map(logdir_name).collect();
        assert_eq!(next_logdir_name(&existing), "logdir_1000");
    }

    #[test]
    fn test_sequential_allocations_are_distinct() {
        let tmp  = TempDir::new().unwrap();
        let root = tmp.path().join("nested").join("logdirs");

        let dirs: Vec<PathBuf> = (0..5).map(|_| new_logdir_in(&root).unwrap()).collect();

        for (i, dir) in dirs.iter().enumerate() {
            assert!(dir.is_dir());
            assert_eq!(dir.file_name().unwrap().to_str().unwrap(), logdir_name(i));
        }
        let unique: HashSet<&PathBuf> = dirs.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_runlog_path_is_deterministic() {
        let path = runlog_path("/tmp/logdir_004", 7);
        assert_eq!(path, PathBuf::from("/tmp/logdir_004/snap_7.jsonl"));
    }

    #[test]
    fn test_list_runlogs_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        for name in ["snap_1.jsonl", "snap_0.jsonl", "readme.md"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }

        let entries = list_runlogs(tmp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, ["snap_0.jsonl", "snap_1.jsonl"]);
        assert_eq!(entries[0].path, tmp.path().join("snap_0.jsonl"));
    }

    #[test]
    fn test_list_missing_dir_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = list_runlogs(tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
