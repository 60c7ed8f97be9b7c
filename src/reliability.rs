//! pass@k reliability metrics and best/worst extraction.
//!
//! Attempts are pooled per image across both variants: an image passes at
//! (threshold, k) when any of its top-k scores meets the threshold. Images
//! with no successful records are left out of the denominator entirely.

use crate::config::AnalysisConfig;
use crate::results::{JudgmentRecord, Variant};
use crate::utils::round3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassAtKReport {
    /// `threshold_<t>` -> `pass@<k>` -> pass rate in [0,1].
    pub pass_at_k_metrics: BTreeMap<String, BTreeMap<String, f64>>,
    pub total_images: usize,
}

/// Pooled scores per image, successful records only.
fn scores_by_image(records: &[JudgmentRecord]) -> BTreeMap<String, Vec<f64>> {
    let mut by_image: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_success()) {
        by_image
            .entry(record.meta.image_name.clone())
            .or_default()
            .push(record.overall_score());
    }
    by_image
}

pub fn pass_at_k(records: &[JudgmentRecord], config: &AnalysisConfig) -> PassAtKReport {
    let by_image = scores_by_image(records);
    let total_images = by_image.len();

    let mut pass_at_k_metrics = BTreeMap::new();
    for &threshold in &config.pass_thresholds {
        let mut rates = BTreeMap::new();
        for &k in &config.k_values {
            let passed = by_image
                .values()
                .filter(|scores| {
                    let mut sorted = scores.to_vec();
                    sorted.sort_by(|a, b| b.total_cmp(a));
                    sorted.iter().take(k).any(|&score| score >= threshold)
                })
                .count();
            let rate = if total_images > 0 {
                passed as f64 / total_images as f64
            } else {
                0.0
            };
            rates.insert(format!("pass@{k}"), round3(rate));
        }
        pass_at_k_metrics.insert(format!("threshold_{threshold}"), rates);
    }

    PassAtKReport {
        pass_at_k_metrics,
        total_images,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtremeEntry {
    pub image_name: String,
    pub variant: Variant,
    pub overall_score: f64,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extremes {
    /// Highest-scoring records, descending.
    pub best: Vec<ExtremeEntry>,
    /// Lowest-scoring records, ascending.
    pub worst: Vec<ExtremeEntry>,
}

/// Best and worst `n` successful records by overall score. With fewer than
/// `n` records, returns what exists. Boundary ties keep the stable sort's
/// original relative order.
pub fn extremes(records: &[JudgmentRecord], n: usize) -> Extremes {
    let mut successful: Vec<&JudgmentRecord> =
        records.iter().filter(|r| r.is_success()).collect();
    successful.sort_by(|a, b| a.overall_score().total_cmp(&b.overall_score()));

    let entry = |record: &JudgmentRecord| ExtremeEntry {
        image_name: record.meta.image_name.clone(),
        variant: record.meta.variant,
        overall_score: record.overall_score(),
        summary: record
            .verdict()
            .map(|v| v.summary.clone())
            .unwrap_or_default(),
    };

    let worst = successful.iter().take(n).map(|r| entry(r)).collect();
    let best = successful.iter().rev().take(n).map(|r| entry(r)).collect();

    Extremes { best, worst }
}
