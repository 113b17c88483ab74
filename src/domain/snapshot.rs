// ============================================================
// Layer 3 — Snapshot Domain Types
// ============================================================
// A Snapshot is one recorded sample of training state:
// epoch number, input patterns, their labels, and the
// weights of every layer at that moment.
//
// The training loop decides what goes into a snapshot, so
// the container is a string-keyed map of heterogeneous
// Values rather than a fixed struct:
//
//   Snapshot
//     ├── "enum"    → Int(3)                 epoch number
//     ├── "labels"  → List[Bytes(b"A"), ..]  pattern names
//     ├── "input"   → Array[4 x 2]           one row per pattern
//     └── "hidden"  → Map                    one layer
//           ├── "weights" → Array[2 x 3]
//           └── "biases"  → Array[3]
//
// Serialised with serde as externally tagged JSON, e.g.
//   {"int": 3}   {"bytes": [65]}   {"array": {"shape": [2], "data": [1.0, 2.0]}}
//
// Reference: Rust Book §6 (Enums), §8 (Collections)
//            serde enum representations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::error::{Result, SnapshotError};

/// Well-known snapshot keys written by the training loop
pub const EPOCH_KEY:   &str = "enum";
pub const LABELS_KEY:  &str = "labels";
pub const INPUT_KEY:   &str = "input";
pub const WEIGHTS_KEY: &str = "weights";

// ─── NdArray ──────────────────────────────────────────────────────────────────
/// A dense n-dimensional numeric array stored row-major.
///
/// Decoding goes through `NdArray::new`, so a stored array
/// whose data does not fill its shape is rejected on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNdArray")]
pub struct NdArray {
    shape: Vec<usize>,
    data:  Vec<f64>,
}

/// Unchecked wire form of an NdArray
#[derive(Deserialize)]
struct RawNdArray {
    shape: Vec<usize>,
    data:  Vec<f64>,
}

impl TryFrom<RawNdArray> for NdArray {
    type Error = SnapshotError;

    fn try_from(raw: RawNdArray) -> Result<Self> {
        NdArray::new(raw.shape, raw.data)
    }
}

impl NdArray {
    /// Build an array, checking that `data` fills `shape` exactly.
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(SnapshotError::ShapeMismatch {
                shape,
                len: data.len(),
                expected,
            });
        }
        Ok(Self { shape, data })
    }

    /// One-dimensional array from a vector
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { shape: vec![data.len()], data }
    }

    /// Two-dimensional array from equal-length rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SnapshotError::RaggedRows { row, len: r.len(), expected: cols });
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::new(vec![rows.len(), cols], data)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Slices along the first axis.
    /// A 1-D array yields one single-element slice per entry.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        let row_len = self.shape.iter().skip(1).product::<usize>().max(1);
        self.data.chunks(row_len)
    }
}

// ─── Value ────────────────────────────────────────────────────────────────────
/// Any value a snapshot field can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Array(NdArray),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&NdArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self { Value::Int(v) }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Float(v) }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Text(v.to_string()) }
}

impl From<String> for Value {
    fn from(v: String) -> Self { Value::Text(v) }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self { Value::Bytes(v) }
}

impl From<NdArray> for Value {
    fn from(v: NdArray) -> Self { Value::Array(v) }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self { Value::List(v) }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self { Value::Map(v) }
}

// ─── Snapshot ─────────────────────────────────────────────────────────────────
/// One recorded training-state sample.
///
/// Serialises as a plain JSON object of tagged Values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    fields: BTreeMap<String, Value>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, so a snapshot can be written as one expression:
    ///
    ///   let snap = Snapshot::new()
    ///       .with("enum", 3)
    ///       .with("input", NdArray::from_vec(vec![1.0, 0.0]));
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Like `get`, but a missing key is an error.
    pub fn field(&self, key: &str) -> Result<&Value> {
        self.fields
            .get(key)
            .ok_or_else(|| SnapshotError::MissingKey(key.to_string()))
    }

    /// The epoch number stored under `enum`
    pub fn epoch(&self) -> Result<i64> {
        self.field(EPOCH_KEY)?
            .as_int()
            .ok_or_else(|| SnapshotError::type_mismatch(EPOCH_KEY, "an integer"))
    }

    /// Fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndarray_rejects_wrong_length() {
        let err = NdArray::new(vec![2, 3], vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, SnapshotError::ShapeMismatch { expected: 6, len: 5, .. }));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = [vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]];
        let err  = NdArray::from_rows(&rows).unwrap_err();
        assert!(matches!(err, SnapshotError::RaggedRows { row: 1, len: 1, expected: 2 }));
    }

    #[test]
    fn test_decoding_checks_shape() {
        let bad = serde_json::from_str::<NdArray>(r#"{"shape":[4,3],"data":[1.0]}"#);
        let err = bad.unwrap_err().to_string();
        assert!(err.contains("shape [4, 3] needs 12"), "{err}");

        let ok: NdArray = serde_json::from_str(r#"{"shape":[2],"data":[1.0,2.0]}"#).unwrap();
        assert_eq!(ok, NdArray::from_vec(vec![1.0, 2.0]));
    }

    #[test]
    fn test_bad_array_in_snapshot_fails_to_decode() {
        let json = r#"{"input":{"array":{"shape":[2,2],"data":[0.0]}}}"#;
        assert!(serde_json::from_str::<Snapshot>(json).is_err());
    }

    #[test]
    fn test_rows_walk_first_axis() {
        let a = NdArray::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let rows: Vec<&[f64]> = a.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
    }

    #[test]
    fn test_rows_of_vector_are_scalars() {
        let a = NdArray::from_vec(vec![7.0, 8.0]);
        assert_eq!(a.rows().count(), 2);
    }

    #[test]
    fn test_epoch_requires_integer() {
        let snap = Snapshot::new().with(EPOCH_KEY, 1.5);
        assert!(matches!(snap.epoch(), Err(SnapshotError::TypeMismatch { .. })));

        let snap = Snapshot::new().with(EPOCH_KEY, 4_i64);
        assert_eq!(snap.epoch().unwrap(), 4);
    }

    #[test]
    fn test_missing_field_is_error() {
        let snap = Snapshot::new();
        assert!(matches!(snap.field("input"), Err(SnapshotError::MissingKey(k)) if k == "input"));
    }

    #[test]
    fn test_json_encoding_is_tagged() {
        let snap = Snapshot::new()
            .with("enum", 2_i64)
            .with("labels", vec![Value::Bytes(b"A".to_vec())]);
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"enum":{"int":2},"labels":{"list":[{"bytes":[65]}]}}"#);

        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
