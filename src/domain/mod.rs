// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing what a training run records.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - Only structs, enums, traits and the error type
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Error type shared by the library layers
pub mod error;

/// Snapshot, Value and NdArray
pub mod snapshot;

/// Bare and wrapped run logs
pub mod run_log;

/// Declared set of layer field names
pub mod layer_schema;

/// Sink / source abstractions the use cases depend on
pub mod traits;
