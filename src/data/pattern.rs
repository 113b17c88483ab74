// ============================================================
// Layer 4 — Pattern Rendering
// ============================================================
// Turns the input patterns of one snapshot into display
// strings for a pattern picker:
//
//   labels: [b"A", b"B"]
//   input:  [[1, 2, 3],          "A | 1,2,3"
//            [0, 0.5, 1]]   →    "B | 0,0,1"      (int)
//                                "B | 0,0.5,1"    (float)
//
// Each input row is cast to the requested element type and
// joined with commas, no brackets. Labels and rows are paired
// in order; whichever side is longer is cut short.
//
// Reference: Rust Book §8 (Strings), std::fmt

use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

use crate::domain::error::{Result, SnapshotError};
use crate::domain::snapshot::{Snapshot, Value, INPUT_KEY, LABELS_KEY};
use crate::infra::runlog_reader::load_test_data;

/// Decimal places kept when printing floats; anything that
/// rounds to zero at this precision is printed as 0
const FLOAT_PRECISION: usize = 8;

/// Element type input rows are cast to before printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Truncate toward zero
    #[default]
    Int,
    Float,
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" => Ok(ElementType::Int),
            "float" => Ok(ElementType::Float),
            other => Err(format!("unknown element type '{other}' (expected int or float)")),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Int => f.write_str("int"),
            ElementType::Float => f.write_str("float"),
        }
    }
}

/// Format one vector as comma-separated elements of `element_type`.
pub fn format_vector(values: &[f64], element_type: ElementType) -> String {
    values
        .iter()
        .map(|&v| match element_type {
            ElementType::Int => format!("{}", v.trunc() as i64),
            ElementType::Float => format_float(v),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text    = format!("{:.*}", FLOAT_PRECISION, v);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Decode a label. Byte strings must be valid UTF-8; text passes through.
fn decode_label(label: &Value) -> Result<String> {
    match label {
        Value::Bytes(bytes) => Ok(String::from_utf8(bytes.clone())?),
        Value::Text(text) => Ok(text.clone()),
        _ => Err(SnapshotError::type_mismatch(LABELS_KEY, "a list of byte strings")),
    }
}

/// `"<label> | <vector>"` for every pattern in snapshot `index`.
pub fn pattern_options(
    snaps:        &[Snapshot],
    index:        usize,
    element_type: ElementType,
) -> Result<Vec<String>> {
    let snap = snaps.get(index).ok_or(SnapshotError::IndexOutOfRange {
        index,
        len: snaps.len(),
    })?;

    let labels = snap
        .field(LABELS_KEY)?
        .as_list()
        .ok_or_else(|| SnapshotError::type_mismatch(LABELS_KEY, "a list of byte strings"))?;
    let input = snap
        .field(INPUT_KEY)?
        .as_array()
        .ok_or_else(|| SnapshotError::type_mismatch(INPUT_KEY, "an array"))?;

    labels
        .iter()
        .zip(input.rows())
        .map(|(label, row)| -> Result<String> {
            Ok(format!(
                "{} | {}",
                decode_label(label)?,
                format_vector(row, element_type)
            ))
        })
        .collect()
}

/// Load `runlog` and render the patterns of snapshot `index`.
pub fn get_pattern_options(
    runlog:       impl AsRef<Path>,
    index:        usize,
    element_type: ElementType,
) -> Result<Vec<String>> {
    pattern_options(&load_test_data(runlog)?, index, element_type)
}
