// ============================================================
// Layer 2 — Configuration
// ============================================================
// Settings shared by the recorder and the inspector.
// Stored as pretty JSON so it can be hand-edited:
//
//   {
//     "logdir_root": "logdirs",
//     "layer_names": ["hidden", "output"],
//     "pattern_element_type": "int"
//   }
//
// Every field has a default, so an empty object `{}` (or no
// file at all) is a valid configuration.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            serde field attributes (default)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::pattern::ElementType;
use crate::domain::layer_schema::LayerSchema;
use crate::infra::logdir::LOGDIR_ROOT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnaplogConfig {
    /// Directory new log directories are allocated under
    pub logdir_root: PathBuf,

    /// Declared layer field names; inferred from the first
    /// snapshot when absent
    pub layer_names: Option<Vec<String>>,

    /// Element type input patterns are printed as
    pub pattern_element_type: ElementType,
}

impl Default for SnaplogConfig {
    fn default() -> Self {
        Self {
            logdir_root:          PathBuf::from(LOGDIR_ROOT),
            layer_names:          None,
            pattern_element_type: ElementType::Int,
        }
    }
}

impl SnaplogConfig {
    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Write this configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved config to '{}'", path.display());
        Ok(())
    }

    /// The declared layer schema, if any
    pub fn layer_schema(&self) -> Option<LayerSchema> {
        self.layer_names.as_ref().map(LayerSchema::declared)
    }
}
