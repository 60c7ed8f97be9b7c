//! Builders for records used across unit tests.

use crate::judge::{CriterionScore, JudgeVerdict};
use crate::results::{FailedJudgment, JudgmentOutcome, JudgmentRecord, RecordMeta, Variant};

fn meta(image_stem: &str, variant: Variant) -> RecordMeta {
    RecordMeta {
        image_name: format!("{image_stem}.png"),
        code_filename: format!("{image_stem}_{}.jsx", variant.suffix()),
        variant,
    }
}

/// A successful record with every criterion scored the same as the overall
/// score, which keeps expected means easy to state in tests.
pub fn success_record(image_stem: &str, variant: Variant, overall: f64) -> JudgmentRecord {
    let score = CriterionScore {
        score: overall,
        explanation: format!("scored {overall}"),
    };
    JudgmentRecord {
        outcome: JudgmentOutcome::Success(JudgeVerdict {
            element_detection: score.clone(),
            structural_accuracy: score.clone(),
            layout_accuracy: score.clone(),
            code_quality: score.clone(),
            completeness: score,
            overall_score: overall,
            summary: format!("{image_stem} scored {overall}"),
            strengths: vec!["readable markup".to_string()],
            weaknesses: vec!["spacing drift".to_string()],
        }),
        meta: meta(image_stem, variant),
    }
}

pub fn failed_record(image_stem: &str, variant: Variant, error: &str) -> JudgmentRecord {
    JudgmentRecord {
        outcome: JudgmentOutcome::Failure(FailedJudgment::new(error)),
        meta: meta(image_stem, variant),
    }
}
