//! Snapshot and report persistence.
//!
//! Whole-buffer writes, one snapshot per run. A failed write is fatal for
//! the run; producing the persisted report is the run's purpose.

use crate::results::EvaluationSnapshot;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

pub const SNAPSHOT_FILENAME: &str = "evaluation_results.json";

pub struct ResultsStore {
    results_dir: PathBuf,
}

impl ResultsStore {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.results_dir.join(SNAPSHOT_FILENAME)
    }

    pub fn save_snapshot(&self, snapshot: &EvaluationSnapshot) -> Result<PathBuf> {
        let path = self.snapshot_path();
        write_json(&path, snapshot)?;
        Ok(path)
    }

    pub fn load_snapshot(&self, path: &Path) -> Result<EvaluationSnapshot> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
    }

    /// Persist a comparison report under a timestamped filename so repeated
    /// runs never overwrite each other.
    pub fn save_comparison_report<T: serde::Serialize>(&self, report: &T) -> Result<PathBuf> {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let path = self
            .results_dir
            .join(format!("model_comparison_report_{timestamp}.json"));
        write_json(&path, report)?;
        Ok(path)
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
