// ============================================================
// Layer 4 — Record Projections
// ============================================================
// Queries over a loaded snapshot list:
//
//   epochs       → [0, 1, 2, ...]              from "enum"
//   data_by_key  → [("loss", [..]), ...]       any fields
//   layer_dims   → [("hidden", [4, 3]), ...]   weight shapes
//   layer_names  → ["hidden", "output"]
//
// Each has a `get_*` twin that takes a run log path and
// loads it first, for one-off queries. Missing keys, layers
// or indices are errors; nothing falls back to a default.
//
// Layer shapes are read from the FIRST snapshot only;
// weight shapes do not change during a run.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::Path;

use crate::domain::error::{Result, SnapshotError};
use crate::domain::layer_schema::LayerSchema;
use crate::domain::snapshot::{Snapshot, Value, WEIGHTS_KEY};
use crate::infra::runlog_reader::load_test_data;

/// Field values across the run, one series per requested key
pub type KeyedSeries = Vec<(String, Vec<Value>)>;

/// Weight shape per requested layer
pub type LayerDims = Vec<(String, Vec<usize>)>;

// ─── Over loaded snapshots ────────────────────────────────────────────────────

/// Epoch number of every snapshot, in stored order.
pub fn epochs(snaps: &[Snapshot]) -> Result<Vec<i64>> {
    snaps.iter().map(Snapshot::epoch).collect()
}

/// For each key (in the order given), that field's value in
/// every snapshot. A repeated key is reported once.
pub fn data_by_key<S: AsRef<str>>(snaps: &[Snapshot], keys: &[S]) -> Result<KeyedSeries> {
    let mut series: KeyedSeries = Vec::with_capacity(keys.len());

    for key in keys.iter().map(AsRef::as_ref) {
        if series.iter().any(|(k, _)| k == key) {
            continue;
        }
        let values = snaps
            .iter()
            .map(|s| s.field(key).cloned())
            .collect::<Result<Vec<_>>>()?;
        series.push((key.to_string(), values));
    }

    Ok(series)
}

/// Shape of each layer's `weights`, taken from the first snapshot.
pub fn layer_dims<S: AsRef<str>>(snaps: &[Snapshot], layer_names: &[S]) -> Result<LayerDims> {
    let first = first_snapshot(snaps)?;

    layer_names
        .iter()
        .map(|name| -> Result<(String, Vec<usize>)> {
            let name  = name.as_ref();
            let layer = layer_map(first, name)?;
            let shape = layer
                .get(WEIGHTS_KEY)
                .ok_or_else(|| SnapshotError::MissingKey(format!("{name}.{WEIGHTS_KEY}")))?
                .as_array()
                .ok_or_else(|| SnapshotError::type_mismatch(format!("{name}.{WEIGHTS_KEY}"), "an array"))?
                .shape()
                .to_vec();
            Ok((name.to_string(), shape))
        })
        .collect()
}

/// Layer names of the run.
///
/// With a declared schema every name must be a nested map in
/// the first snapshot. Without one the schema is inferred
/// from the first snapshot's nested-map fields.
pub fn layer_names(snaps: &[Snapshot], schema: Option<&LayerSchema>) -> Result<Vec<String>> {
    let first = first_snapshot(snaps)?;

    let Some(schema) = schema else {
        return Ok(LayerSchema::infer(first).names().to_vec());
    };

    for name in schema.names() {
        layer_map(first, name)?;
    }
    Ok(schema.names().to_vec())
}

fn first_snapshot(snaps: &[Snapshot]) -> Result<&Snapshot> {
    snaps
        .first()
        .ok_or(SnapshotError::IndexOutOfRange { index: 0, len: 0 })
}

fn layer_map<'a>(
    snap: &'a Snapshot,
    name: &str,
) -> Result<&'a std::collections::BTreeMap<String, Value>> {
    snap.get(name)
        .and_then(Value::as_map)
        .ok_or_else(|| SnapshotError::MissingLayer(name.to_string()))
}

// ─── Over a run log path ──────────────────────────────────────────────────────

pub fn get_epochs(runlog: impl AsRef<Path>) -> Result<Vec<i64>> {
    epochs(&load_test_data(runlog)?)
}

pub fn get_data_by_key<S: AsRef<str>>(runlog: impl AsRef<Path>, keys: &[S]) -> Result<KeyedSeries> {
    data_by_key(&load_test_data(runlog)?, keys)
}

pub fn get_layer_dims<S: AsRef<str>>(runlog: impl AsRef<Path>, layer_names: &[S]) -> Result<LayerDims> {
    layer_dims(&load_test_data(runlog)?, layer_names)
}

pub fn get_layer_names(runlog: impl AsRef<Path>, schema: Option<&LayerSchema>) -> Result<Vec<String>> {
    layer_names(&load_test_data(runlog)?, schema)
}
