// ============================================================
// Layer 2 — Inspect Use Case
// ============================================================
// The reader side: load one run log, then answer any number
// of queries against it without touching the disk again.
//
//   Step 1: load the run log            (Layer 6 - infra)
//   Step 2: keep the snapshot list      (bare or wrapped)
//   Step 3: answer queries              (Layer 4 - data)
//
// Layer names come from the configured schema when one is
// declared, and are inferred from the first snapshot
// otherwise.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::application::config::SnaplogConfig;
use crate::data::{
    pattern::{pattern_options, ElementType},
    projection::{self, KeyedSeries, LayerDims},
};
use crate::domain::layer_schema::LayerSchema;
use crate::domain::snapshot::Snapshot;
use crate::domain::traits::RunLogSource;
use crate::infra::runlog_reader::RunLogFile;

pub struct InspectUseCase {
    source:    PathBuf,
    snapshots: Vec<Snapshot>,
    schema:    Option<LayerSchema>,
}

impl InspectUseCase {
    /// Load the run log at `path`.
    pub fn open(path: impl Into<PathBuf>, config: &SnaplogConfig) -> Result<Self> {
        let file = RunLogFile::new(path);
        Self::from_source(&file, file.path().to_path_buf(), config)
    }

    /// Load from any run log source; `label` names it in errors.
    pub fn from_source(
        source: &impl RunLogSource,
        label:  PathBuf,
        config: &SnaplogConfig,
    ) -> Result<Self> {
        let snapshots = source
            .load()
            .with_context(|| format!("Cannot load run log '{}'", label.display()))?
            .into_test_data();

        tracing::info!("Loaded {} snapshots from '{}'", snapshots.len(), label.display());

        Ok(Self {
            source: label,
            snapshots,
            schema: config.layer_schema(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn epochs(&self) -> Result<Vec<i64>> {
        projection::epochs(&self.snapshots).with_context(|| self.context("epochs"))
    }

    pub fn data_by_key<S: AsRef<str>>(&self, keys: &[S]) -> Result<KeyedSeries> {
        projection::data_by_key(&self.snapshots, keys).with_context(|| self.context("field values"))
    }

    pub fn patterns(&self, index: usize, element_type: ElementType) -> Result<Vec<String>> {
        pattern_options(&self.snapshots, index, element_type)
            .with_context(|| self.context("patterns"))
    }

    pub fn layer_dims<S: AsRef<str>>(&self, layer_names: &[S]) -> Result<LayerDims> {
        projection::layer_dims(&self.snapshots, layer_names)
            .with_context(|| self.context("layer dimensions"))
    }

    pub fn layer_names(&self) -> Result<Vec<String>> {
        projection::layer_names(&self.snapshots, self.schema.as_ref())
            .with_context(|| self.context("layer names"))
    }

    fn context(&self, what: &str) -> String {
        format!("Cannot read {what} from '{}'", self.source.display())
    }
}
