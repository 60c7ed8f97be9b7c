//! Summary aggregation over judgment records.
//!
//! Reduces a run's records to per-variant statistics. Only successful
//! records enter the means; failed records are counted in the failure tally
//! and nothing else. Means are kept unrounded here and rounded by the
//! serializers in `utils` when persisted or displayed.

use crate::judge::Criterion;
use crate::results::{JudgmentRecord, Variant};
use crate::utils::{serialize_round2, serialize_round2_map};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics for one variant (or for both pooled, in
/// `overall_summary`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantSummary {
    pub count: usize,
    pub successful_evaluations: usize,
    #[serde(serialize_with = "serialize_round2")]
    pub average_overall_score: f64,
    #[serde(serialize_with = "serialize_round2_map")]
    pub average_criteria_scores: BTreeMap<Criterion, f64>,
}

impl VariantSummary {
    fn from_records<'a>(records: impl Iterator<Item = &'a JudgmentRecord>) -> Self {
        let records: Vec<&JudgmentRecord> = records.collect();
        let successful: Vec<&JudgmentRecord> =
            records.iter().copied().filter(|r| r.is_success()).collect();

        if successful.is_empty() {
            return Self {
                count: records.len(),
                ..Self::default()
            };
        }

        let n = successful.len() as f64;
        let average_overall_score =
            successful.iter().map(|r| r.overall_score()).sum::<f64>() / n;

        let mut average_criteria_scores = BTreeMap::new();
        for criterion in Criterion::ALL {
            let total: f64 = successful.iter().map(|r| r.criterion_score(criterion)).sum();
            average_criteria_scores.insert(criterion, total / n);
        }

        Self {
            count: records.len(),
            successful_evaluations: successful.len(),
            average_overall_score,
            average_criteria_scores,
        }
    }

    pub fn criterion_mean(&self, criterion: Criterion) -> f64 {
        self.average_criteria_scores
            .get(&criterion)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Aggregate over a full evaluation run: both variants plus the pooled view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub total_evaluations: usize,
    pub successful_evaluations: usize,
    pub failed_evaluations: usize,
    pub model1_summary: VariantSummary,
    pub model2_summary: VariantSummary,
    pub overall_summary: VariantSummary,
}

impl EvaluationSummary {
    pub fn variant(&self, variant: Variant) -> &VariantSummary {
        match variant {
            Variant::Model1 => &self.model1_summary,
            Variant::Model2 => &self.model2_summary,
        }
    }
}

/// Derive fresh per-variant and pooled summaries from a record set.
pub fn summarize(records: &[JudgmentRecord]) -> EvaluationSummary {
    let successful = records.iter().filter(|r| r.is_success()).count();

    let for_variant = |variant: Variant| {
        VariantSummary::from_records(records.iter().filter(move |r| r.meta.variant == variant))
    };

    EvaluationSummary {
        total_evaluations: records.len(),
        successful_evaluations: successful,
        failed_evaluations: records.len() - successful,
        model1_summary: for_variant(Variant::Model1),
        model2_summary: for_variant(Variant::Model2),
        overall_summary: VariantSummary::from_records(records.iter()),
    }
}
