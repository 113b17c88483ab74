// ============================================================
// Layer 3 — Layer Schema
// ============================================================
// Which snapshot fields are model layers?
//
// The training loop stores each layer as a nested map
// (weights, biases, ...) next to plain fields like "enum"
// and "input". Callers should say which names are layers
// up front; `infer` exists for logs whose writer never
// declared them, and must be asked for explicitly.

use serde::{Deserialize, Serialize};

use crate::domain::snapshot::Snapshot;

/// Ordered set of layer field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSchema {
    names: Vec<String>,
}

impl LayerSchema {
    /// Declare the layer names. Duplicates keep their first position.
    pub fn declared<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// Every field of `snapshot` holding a nested map, in key order.
    pub fn infer(snapshot: &Snapshot) -> Self {
        let names = snapshot
            .iter()
            .filter(|(_, v)| v.is_map())
            .map(|(k, _)| k.clone())
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
