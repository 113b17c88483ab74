// ============================================================
// ffbp-snaplog — training snapshot utilities
// ============================================================
// Helpers around a feed-forward / back-propagation training
// run: where its logs go, how snapshots are stored, how they
// are queried afterwards, and the loss it is trained on.
//
// The crate is split into layers, outermost first:
//
//   Layer 1  cli          — clap commands for the binary
//   Layer 2  application  — record / inspect workflows, config
//   Layer 3  domain       — Snapshot, Value, RunLog, errors
//   Layer 4  data         — projections and pattern strings
//   Layer 5  ml           — clipped cross-entropy (burn)
//   Layer 6  infra        — log dirs, run log store and reader
//
// Typical use from a training loop:
//
//   let mut rec = SnapshotRecorder::create(&SnaplogConfig::default(), 0)?;
//   for epoch in 0..epochs {
//       rec.record(Snapshot::new().with("enum", epoch as i64) /* ... */)?;
//   }
//
// Reference: Rust Book §7 (Packages, Crates and Modules)

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;

pub use application::{
    config::SnaplogConfig,
    inspect_use_case::InspectUseCase,
    record_use_case::SnapshotRecorder,
};
pub use data::pattern::{get_pattern_options, ElementType};
pub use data::projection::{get_data_by_key, get_epochs, get_layer_dims, get_layer_names};
pub use domain::error::SnapshotError;
pub use domain::layer_schema::LayerSchema;
pub use domain::run_log::RunLog;
pub use domain::snapshot::{NdArray, Snapshot, Value};
pub use infra::logdir::{list_runlogs, new_logdir, new_logdir_in, next_logdir_name};
pub use infra::runlog_reader::{load_runlog, load_test_data, save_runlog};
pub use infra::snapshot_store::{store_snapshot, SnapshotStore};
pub use ml::loss::{clipped, cross_entropy};
