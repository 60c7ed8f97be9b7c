use crate::judge::{Criterion, JudgeVerdict};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two competing code-generation approaches under evaluation.
///
/// Assigned once by the collector from the artifact filename suffix and
/// carried on every record; downstream code matches on the enum, never on
/// free-text model names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Model1,
    Model2,
}

impl Variant {
    pub const BOTH: [Variant; 2] = [Variant::Model1, Variant::Model2];

    /// Filename suffix that joins a generated artifact to its image:
    /// `<image-stem>_<suffix>.jsx`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Variant::Model1 => "model1",
            Variant::Model2 => "model2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Model1 => "Model 1",
            Variant::Model2 => "Model 2",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of a judgment: which image, which variant, which artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMeta {
    pub image_name: String,
    pub code_filename: String,
    pub variant: Variant,
}

/// A judge call that could not produce a usable verdict. Failed judgments
/// carry a diagnostic instead of scores and count only in failure tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedJudgment {
    pub error: String,
    /// Always 0; kept on the wire so failure objects stay self-describing.
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl FailedJudgment {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            overall_score: 0.0,
            raw_response: None,
        }
    }

    pub fn with_raw(error: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            overall_score: 0.0,
            raw_response: Some(raw.into()),
        }
    }
}

/// Outcome of judging one (image, artifact) pair.
///
/// Untagged on the wire: failure objects are recognized by their `error`
/// key, success objects by the verdict fields, matching the persisted
/// snapshot format. `Failure` must stay first so an error object is never
/// misread as an all-zero verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JudgmentOutcome {
    Failure(FailedJudgment),
    Success(JudgeVerdict),
}

/// One evaluation of one generated artifact against one reference image.
/// Immutable once built; a run's full set is persisted as one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentRecord {
    #[serde(flatten)]
    pub outcome: JudgmentOutcome,
    pub meta: RecordMeta,
}

impl JudgmentRecord {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, JudgmentOutcome::Success(_))
    }

    pub fn verdict(&self) -> Option<&JudgeVerdict> {
        match &self.outcome {
            JudgmentOutcome::Success(verdict) => Some(verdict),
            JudgmentOutcome::Failure(_) => None,
        }
    }

    /// Overall score; 0 for failed records.
    pub fn overall_score(&self) -> f64 {
        match &self.outcome {
            JudgmentOutcome::Success(verdict) => verdict.overall_score,
            JudgmentOutcome::Failure(_) => 0.0,
        }
    }

    pub fn criterion_score(&self, criterion: Criterion) -> f64 {
        self.verdict().map_or(0.0, |v| v.criterion(criterion).score)
    }
}

/// Run-level bookkeeping persisted alongside the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub total_images: usize,
    pub total_evaluations: usize,
    pub model_used: String,
    pub images_dir: String,
    pub code_dir: String,
}

/// The complete persisted output of one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSnapshot {
    pub evaluation_summary: crate::summary::EvaluationSummary,
    pub detailed_results: Vec<JudgmentRecord>,
    pub meta: RunMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_json() -> &'static str {
        r#"{
            "element_detection": {"score": 8, "explanation": "all buttons present"},
            "structural_accuracy": {"score": 7, "explanation": "ok nesting"},
            "layout_accuracy": {"score": 6, "explanation": "spacing off"},
            "code_quality": {"score": 9, "explanation": "clean"},
            "completeness": {"score": 7, "explanation": "mostly done"},
            "overall_score": 7.4,
            "summary": "solid attempt",
            "strengths": ["buttons"],
            "weaknesses": ["spacing"],
            "meta": {
                "image_name": "mobile_ui_001.png",
                "code_filename": "mobile_ui_001_model1.jsx",
                "variant": "model1"
            }
        }"#
    }

    #[test]
    fn success_record_round_trips() {
        let record: JudgmentRecord = serde_json::from_str(success_json()).unwrap();
        assert!(record.is_success());
        assert_eq!(record.overall_score(), 7.4);
        assert_eq!(record.meta.variant, Variant::Model1);
        assert_eq!(record.criterion_score(Criterion::CodeQuality), 9.0);

        let json = serde_json::to_string(&record).unwrap();
        let again: JudgmentRecord = serde_json::from_str(&json).unwrap();
        assert!(again.is_success());
        assert_eq!(again.overall_score(), 7.4);
    }

    #[test]
    fn failure_record_is_not_mistaken_for_success() {
        let json = r#"{
            "error": "API call failed: timeout",
            "overall_score": 0,
            "meta": {
                "image_name": "mobile_ui_002.png",
                "code_filename": "mobile_ui_002_model2.jsx",
                "variant": "model2"
            }
        }"#;
        let record: JudgmentRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_success());
        assert_eq!(record.overall_score(), 0.0);
        match &record.outcome {
            JudgmentOutcome::Failure(failure) => {
                assert!(failure.error.contains("timeout"));
            }
            JudgmentOutcome::Success(_) => panic!("parsed failure as success"),
        }
    }

    #[test]
    fn missing_criterion_defaults_to_zero() {
        let json = r#"{
            "element_detection": {"score": 8, "explanation": "fine"},
            "overall_score": 5,
            "meta": {
                "image_name": "mobile_ui_003.png",
                "code_filename": "mobile_ui_003_model1.jsx",
                "variant": "model1"
            }
        }"#;
        let record: JudgmentRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_success());
        assert_eq!(record.criterion_score(Criterion::ElementDetection), 8.0);
        assert_eq!(record.criterion_score(Criterion::Completeness), 0.0);
    }

    #[test]
    fn variant_suffix_and_label() {
        assert_eq!(Variant::Model1.suffix(), "model1");
        assert_eq!(Variant::Model2.label(), "Model 2");
        assert_eq!(
            serde_json::to_string(&Variant::Model2).unwrap(),
            "\"model2\""
        );
    }
}
