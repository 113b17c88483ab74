// ============================================================
// Layer 4 — Run Log Queries
// ============================================================
// Read-only views over a recorded run:
//
//   run log file
//       │
//       ▼
//   load_test_data    → Vec<Snapshot>   (Layer 6)
//       │
//       ├──► projection → epochs, fields by key,
//       │                 layer shapes, layer names
//       │
//       └──► pattern    → "label | 1,0,1" display strings
//
// Every query comes in two flavours: over already loaded
// snapshots (cheap to repeat) and over a run log path.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Epochs, field series, layer shapes and layer names
pub mod projection;

/// Input pattern display strings
pub mod pattern;
