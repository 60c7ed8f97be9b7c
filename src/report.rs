//! Text report rendering.
//!
//! Renders a persisted snapshot to the human-readable report: metadata
//! header, per-variant aggregate statistics, then every successful judgment
//! grouped by image in first-seen order. Numbers come straight from the
//! snapshot; this module formats, it never recomputes.

use crate::judge::Criterion;
use crate::results::{EvaluationSnapshot, JudgmentRecord, Variant};
use crate::summary::VariantSummary;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

pub fn render(snapshot: &EvaluationSnapshot) -> String {
    let mut out = String::new();

    let rule = "=".repeat(60);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "DETAILED REPORT OF LLM AS A JUDGE");
    let _ = writeln!(out, "{rule}");

    let meta = &snapshot.meta;
    let _ = writeln!(out, "\nGeneral Information:");
    let _ = writeln!(out, "  Total Images: {}", meta.total_images);
    let _ = writeln!(out, "  Total Evaluations: {}", meta.total_evaluations);
    let _ = writeln!(out, "  Judge Model: {}", meta.model_used);

    let summary = &snapshot.evaluation_summary;
    let _ = writeln!(out, "\nSummary Statistics:");
    let _ = writeln!(
        out,
        "  Successful Evaluations: {}",
        summary.successful_evaluations
    );
    let _ = writeln!(out, "  Failed Evaluations: {}", summary.failed_evaluations);

    for variant in Variant::BOTH {
        render_variant_stats(&mut out, variant, summary.variant(variant));
    }

    let grouped = group_by_image(&snapshot.detailed_results);
    if !grouped.is_empty() {
        let rule = "=".repeat(40);
        let _ = writeln!(out, "\n{rule}");
        let _ = writeln!(out, "DETAILED RESULTS BY IMAGE");
        let _ = writeln!(out, "{rule}");

        for (image_name, records) in grouped {
            let _ = writeln!(out, "\n{image_name}");
            let _ = writeln!(out, "{}", "-".repeat(40));
            for record in records {
                render_record(&mut out, record);
            }
        }
    }

    out
}

fn render_variant_stats(out: &mut String, variant: Variant, stats: &VariantSummary) {
    if stats.count == 0 {
        return;
    }
    let _ = writeln!(out, "\n  {}:", variant.label());
    let _ = writeln!(
        out,
        "    Average Overall Score: {:.2}/10",
        stats.average_overall_score
    );
    let _ = writeln!(out, "    Number of Evaluations: {}", stats.count);
    if !stats.average_criteria_scores.is_empty() {
        let _ = writeln!(out, "    Average Scores by Criterion:");
        for criterion in Criterion::ALL {
            let _ = writeln!(
                out,
                "      {criterion}: {:.2}/10",
                stats.criterion_mean(criterion)
            );
        }
    }
}

fn render_record(out: &mut String, record: &JudgmentRecord) {
    let Some(verdict) = record.verdict() else {
        return;
    };

    let _ = writeln!(
        out,
        "\n  {}: {}/10",
        record.meta.variant.label(),
        verdict.overall_score
    );

    for criterion in Criterion::ALL {
        let score = verdict.criterion(criterion);
        let _ = writeln!(out, "    {criterion}: {}/10", score.score);
        let explanation = score.explanation.trim();
        if !explanation.is_empty() {
            let _ = writeln!(out, "      {explanation}");
        }
    }

    if !verdict.strengths.is_empty() {
        let _ = writeln!(out, "    Strengths: {}", verdict.strengths.join(", "));
    }
    if !verdict.weaknesses.is_empty() {
        let _ = writeln!(out, "    Weaknesses: {}", verdict.weaknesses.join(", "));
    }
    let summary_text = verdict.summary.trim();
    if !summary_text.is_empty() {
        let _ = writeln!(out, "    Summary: {summary_text}");
    }
}

/// Successful records grouped by image, preserving first-seen order.
fn group_by_image(records: &[JudgmentRecord]) -> Vec<(&str, Vec<&JudgmentRecord>)> {
    let mut order: Vec<(&str, Vec<&JudgmentRecord>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.is_success()) {
        let image = record.meta.image_name.as_str();
        match index.get(image) {
            Some(&i) => order[i].1.push(record),
            None => {
                index.insert(image, order.len());
                order.push((image, vec![record]));
            }
        }
    }

    order
}

pub fn save_report(snapshot: &EvaluationSnapshot, path: &Path) -> Result<()> {
    let report = render(snapshot);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::test_helpers::{failed_record, success_record};
    use crate::results::RunMeta;
    use crate::summary::summarize;

    fn snapshot() -> EvaluationSnapshot {
        let records = vec![
            success_record("mobile_ui_002", Variant::Model1, 8.0),
            success_record("mobile_ui_002", Variant::Model2, 6.0),
            success_record("mobile_ui_001", Variant::Model1, 7.0),
            failed_record("mobile_ui_003", Variant::Model2, "timeout"),
        ];
        EvaluationSnapshot {
            evaluation_summary: summarize(&records),
            meta: RunMeta {
                total_images: 3,
                total_evaluations: 4,
                model_used: "claude-test".to_string(),
                images_dir: "./imgs".to_string(),
                code_dir: "./gen".to_string(),
            },
            detailed_results: records,
        }
    }

    #[test]
    fn report_has_fixed_section_order() {
        let text = render(&snapshot());

        let header = text.find("DETAILED REPORT OF LLM AS A JUDGE").unwrap();
        let general = text.find("General Information:").unwrap();
        let stats = text.find("Summary Statistics:").unwrap();
        let detailed = text.find("DETAILED RESULTS BY IMAGE").unwrap();
        assert!(header < general && general < stats && stats < detailed);

        assert!(text.contains("Judge Model: claude-test"));
        assert!(text.contains("Successful Evaluations: 3"));
        assert!(text.contains("Failed Evaluations: 1"));
    }

    #[test]
    fn images_appear_in_first_seen_order() {
        let text = render(&snapshot());
        let first = text.find("mobile_ui_002.png").unwrap();
        let second = text.find("mobile_ui_001.png").unwrap();
        assert!(first < second);
    }

    #[test]
    fn failed_records_are_omitted_from_the_breakdown() {
        let text = render(&snapshot());
        assert!(!text.contains("mobile_ui_003.png"));
    }

    #[test]
    fn means_render_with_two_decimals() {
        let text = render(&snapshot());
        // Model 1 mean over 8.0 and 7.0.
        assert!(text.contains("Average Overall Score: 7.50/10"));
    }

    #[test]
    fn renders_strengths_weaknesses_and_summary() {
        let text = render(&snapshot());
        assert!(text.contains("Strengths: readable markup"));
        assert!(text.contains("Weaknesses: spacing drift"));
        assert!(text.contains("Summary: mobile_ui_001 scored 7"));
    }

    #[test]
    fn save_report_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("detailed_report.txt");
        save_report(&snapshot(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("DETAILED REPORT"));
    }
}
