// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem:
//
//   logdir.rs         — Log directory allocation
//                       Picks the next free logdir_NNN name
//                       from the current listing and creates
//                       it. Also lists the run logs inside.
//
//   snapshot_store.rs — Append-only run logs
//                       One JSON line per snapshot, appended
//                       under an exclusive file lock.
//
//   runlog_reader.rs  — Run log loading
//                       Reads JSON Lines, bare arrays and
//                       wrapped {"test_data": [...]} logs.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §12 (I/O and File Handling)

/// Log directory naming, creation and listing
pub mod logdir;

/// Appending snapshots to run logs
pub mod snapshot_store;

/// Loading and exporting run logs
pub mod runlog_reader;
