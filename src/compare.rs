//! Head-to-head comparison between the two variants.
//!
//! Winners are decided by strict inequality of unrounded mean scores; the
//! tie threshold only softens the recommendation text, never the nominal
//! winner. Per-criterion strengths use a stricter margin than the overall
//! tie threshold.

use crate::config::Config;
use crate::judge::Criterion;
use crate::results::{EvaluationSnapshot, Variant};
use crate::summary::{summarize, VariantSummary};
use crate::utils::serialize_round2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const INSUFFICIENT_DATA: &str = "Insufficient data for comparison";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Model1,
    Model2,
    Tie,
}

impl Winner {
    fn of(score1: f64, score2: f64) -> Self {
        if score1 > score2 {
            Winner::Model1
        } else if score2 > score1 {
            Winner::Model2
        } else {
            Winner::Tie
        }
    }

    pub fn variant(&self) -> Option<Variant> {
        match self {
            Winner::Model1 => Some(Variant::Model1),
            Winner::Model2 => Some(Variant::Model2),
            Winner::Tie => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionComparison {
    #[serde(serialize_with = "serialize_round2")]
    pub model1_score: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub model2_score: f64,
    /// Signed difference, model1 minus model2.
    #[serde(serialize_with = "serialize_round2")]
    pub difference: f64,
    pub winner: Winner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOverview {
    pub total_images_evaluated: usize,
    pub total_evaluations: usize,
    pub successful_evaluations: usize,
    pub winner: Winner,
    #[serde(serialize_with = "serialize_round2")]
    pub winner_score: f64,
    /// Absolute gap between the two mean overall scores.
    #[serde(serialize_with = "serialize_round2")]
    pub score_difference: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelComparison {
    pub model1: VariantSummary,
    pub model2: VariantSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub evaluation_summary: ComparisonOverview,
    pub model_comparison: ModelComparison,
    pub detailed_comparison: BTreeMap<Criterion, CriterionComparison>,
    pub model_strengths: BTreeMap<String, Vec<String>>,
    pub recommendations: Vec<String>,
    pub raw_evaluation_data: EvaluationSnapshot,
}

/// Outcome of a comparison: either a full report or an explicit
/// insufficient-data value. Serialized untagged so the insufficient case is
/// the documented `{"error": ...}` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonResult {
    InsufficientData { error: String },
    Report(Box<ComparisonReport>),
}

impl ComparisonResult {
    pub fn report(&self) -> Option<&ComparisonReport> {
        match self {
            ComparisonResult::Report(report) => Some(report),
            ComparisonResult::InsufficientData { .. } => None,
        }
    }
}

/// Compare the two variants over a run snapshot.
///
/// Summaries are recomputed from the records so the comparison always sees
/// unrounded means, regardless of what the persisted summary was rounded to.
pub fn compare(snapshot: &EvaluationSnapshot, config: &Config) -> ComparisonResult {
    let summary = summarize(&snapshot.detailed_results);
    let model1 = summary.model1_summary.clone();
    let model2 = summary.model2_summary.clone();

    if model1.successful_evaluations == 0 || model2.successful_evaluations == 0 {
        return ComparisonResult::InsufficientData {
            error: INSUFFICIENT_DATA.to_string(),
        };
    }

    let score1 = model1.average_overall_score;
    let score2 = model2.average_overall_score;
    let winner = Winner::of(score1, score2);
    let winner_score = match winner {
        Winner::Model2 => score2,
        Winner::Model1 | Winner::Tie => score1,
    };

    let mut detailed_comparison = BTreeMap::new();
    let mut strengths: BTreeMap<Variant, Vec<String>> = BTreeMap::new();
    for criterion in Criterion::ALL {
        let s1 = model1.criterion_mean(criterion);
        let s2 = model2.criterion_mean(criterion);
        detailed_comparison.insert(
            criterion,
            CriterionComparison {
                model1_score: s1,
                model2_score: s2,
                difference: s1 - s2,
                winner: Winner::of(s1, s2),
            },
        );

        let margin = config.analysis.strength_margin;
        if s1 > s2 + margin {
            strengths
                .entry(Variant::Model1)
                .or_default()
                .push(format!("{criterion}: {s1:.2} vs {s2:.2}"));
        } else if s2 > s1 + margin {
            strengths
                .entry(Variant::Model2)
                .or_default()
                .push(format!("{criterion}: {s2:.2} vs {s1:.2}"));
        }
    }

    let model_strengths = Variant::BOTH
        .into_iter()
        .map(|variant| {
            (
                config.variant_name(variant).to_string(),
                strengths.remove(&variant).unwrap_or_default(),
            )
        })
        .collect();

    let recommendations = if (score1 - score2).abs() < config.analysis.tie_threshold {
        vec![
            "Both models show comparable results".to_string(),
            "Model selection may depend on specific requirements".to_string(),
        ]
    } else {
        // Gap above the tie threshold implies a strict winner.
        let name = winner
            .variant()
            .map(|v| config.variant_name(v))
            .unwrap_or_default();
        vec![
            format!("Model {name} shows significantly better results"),
            format!("It is recommended to use {name} for UI code generation"),
        ]
    };

    ComparisonResult::Report(Box::new(ComparisonReport {
        evaluation_summary: ComparisonOverview {
            total_images_evaluated: snapshot.meta.total_images,
            total_evaluations: summary.total_evaluations,
            successful_evaluations: summary.successful_evaluations,
            winner,
            winner_score,
            score_difference: (score1 - score2).abs(),
        },
        model_comparison: ModelComparison { model1, model2 },
        detailed_comparison,
        model_strengths,
        recommendations,
        raw_evaluation_data: snapshot.clone(),
    }))
}
