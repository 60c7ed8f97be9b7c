use serde::{Deserialize, Serialize};
use std::fmt;

/// The five fixed dimensions the judge scores each generated artifact on.
///
/// Declaration order is the canonical display order used in reports and
/// per-criterion comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    ElementDetection,
    StructuralAccuracy,
    LayoutAccuracy,
    CodeQuality,
    Completeness,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::ElementDetection,
        Criterion::StructuralAccuracy,
        Criterion::LayoutAccuracy,
        Criterion::CodeQuality,
        Criterion::Completeness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::ElementDetection => "element_detection",
            Criterion::StructuralAccuracy => "structural_accuracy",
            Criterion::LayoutAccuracy => "layout_accuracy",
            Criterion::CodeQuality => "code_quality",
            Criterion::Completeness => "completeness",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One criterion's score and the judge's explanation for it.
///
/// The default (score 0, empty explanation) is what a verdict gets for any
/// criterion the judge omitted. That normalization happens here, at
/// deserialization, so downstream aggregation never special-cases missing
/// criteria.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriterionScore {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub explanation: String,
}

/// A well-formed judgment of one generated artifact against its screenshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeVerdict {
    #[serde(default)]
    pub element_detection: CriterionScore,
    #[serde(default)]
    pub structural_accuracy: CriterionScore,
    #[serde(default)]
    pub layout_accuracy: CriterionScore,
    #[serde(default)]
    pub code_quality: CriterionScore,
    #[serde(default)]
    pub completeness: CriterionScore,
    pub overall_score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl JudgeVerdict {
    pub fn criterion(&self, criterion: Criterion) -> &CriterionScore {
        match criterion {
            Criterion::ElementDetection => &self.element_detection,
            Criterion::StructuralAccuracy => &self.structural_accuracy,
            Criterion::LayoutAccuracy => &self.layout_accuracy,
            Criterion::CodeQuality => &self.code_quality,
            Criterion::Completeness => &self.completeness,
        }
    }
}
