// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflows built from the lower layers:
//
//   record  — allocate a log directory, then append one
//             snapshot per epoch to the run's log
//   inspect — load a run log once and query it
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 6)
//   - Errors are anyhow, with context naming the file
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// Settings file shared by both workflows
pub mod config;

/// The recording workflow
pub mod record_use_case;

/// The run log inspection workflow
pub mod inspect_use_case;
