// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The recorder only needs "somewhere to put snapshots" and
// the inspector only needs "somewhere to read a run log".
// Programming against these traits keeps the use cases
// testable with in-memory implementations:
//
//   SnapshotSink    ← SnapshotStore (append-only .jsonl file)
//   RunLogSource    ← RunLogFile    (any accepted run log file)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::Result;
use crate::domain::run_log::RunLog;
use crate::domain::snapshot::Snapshot;

// ─── SnapshotSink ─────────────────────────────────────────────────────────────
/// Anything that can durably append snapshots in order.
pub trait SnapshotSink {
    /// Append one snapshot after every snapshot appended before it.
    fn append(&self, snapshot: &Snapshot) -> Result<()>;
}

// ─── RunLogSource ─────────────────────────────────────────────────────────────
/// Anything a run log can be loaded from.
pub trait RunLogSource {
    fn load(&self) -> Result<RunLog>;
}
