//! Seed dataset loading.
//!
//! Provides two loading methods:
//! - `default_dataset()` - Parses the dataset embedded in the binary
//! - `load_dataset(path)` - Loads a custom dataset from a file path

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::experiments::ExperimentRun;

use super::parse::parse_metric;
use super::types::{AuxMetric, MetricSnapshot};

/// Default dataset embedded in the binary at compile time.
/// Loaded from `config/default_dataset.toml`.
const DEFAULT_DATASET: &str = include_str!("../../config/default_dataset.toml");

/// Raw dataset file contents. Metric values are display-formatted strings
/// that go through the lenient parser.
#[derive(Debug, Deserialize)]
struct RawDataset {
    baseline: RawSnapshot,
    optimized: RawSnapshot,
    #[serde(default)]
    experiments: Vec<ExperimentRun>,
    #[serde(default)]
    aux_metrics: Vec<AuxMetric>,
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    accuracy: String,
    energy: String,
    time: String,
}

impl RawSnapshot {
    fn parsed(&self) -> MetricSnapshot {
        MetricSnapshot::new(
            parse_metric(&self.accuracy),
            parse_metric(&self.energy),
            parse_metric(&self.time),
        )
        .sanitized()
    }
}

/// Parsed seed data a dashboard session boots from.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub baseline: MetricSnapshot,
    pub optimized: MetricSnapshot,
    pub experiments: Vec<ExperimentRun>,
    pub aux_metrics: Vec<AuxMetric>,
}

impl From<RawDataset> for Dataset {
    fn from(raw: RawDataset) -> Self {
        Self {
            baseline: raw.baseline.parsed(),
            optimized: raw.optimized.parsed(),
            experiments: raw.experiments,
            aux_metrics: raw.aux_metrics,
        }
    }
}

/// Load a dataset from a TOML file at the given path.
///
/// Malformed metric values inside a structurally valid file do not fail
/// the load; they parse to NaN and the score computation degrades.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let raw: RawDataset = toml::from_str(&content)?;
    Ok(raw.into())
}

/// Get the default dataset embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_dataset() -> Dataset {
    let raw: RawDataset =
        toml::from_str(DEFAULT_DATASET).expect("embedded default_dataset.toml must be valid TOML");
    raw.into()
}
