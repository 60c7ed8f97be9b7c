//! Console summaries printed after each command.

use crate::compare::ComparisonReport;
use crate::config::Config;
use crate::reliability::{Extremes, PassAtKReport};
use crate::results::{EvaluationSnapshot, Variant};

pub fn print_run_summary(snapshot: &EvaluationSnapshot) {
    let summary = &snapshot.evaluation_summary;

    println!("\n--- Evaluation Summary ---");
    println!("Images: {}", snapshot.meta.total_images);
    println!("Evaluations: {}", snapshot.meta.total_evaluations);
    println!("Successful: {}", summary.successful_evaluations);
    println!("Failed: {}", summary.failed_evaluations);

    for variant in Variant::BOTH {
        let stats = summary.variant(variant);
        if stats.successful_evaluations > 0 {
            println!(
                "{} average score: {:.2}/10 ({} evaluations)",
                variant.label(),
                stats.average_overall_score,
                stats.successful_evaluations
            );
        }
    }
}

pub fn print_comparison_summary(report: &ComparisonReport, config: &Config) {
    let overview = &report.evaluation_summary;

    println!("\n{}", "=".repeat(70));
    println!("Model comparison summary:");
    println!("{}", "=".repeat(70));
    println!("Total images evaluated: {}", overview.total_images_evaluated);
    println!("Successful evaluations: {}", overview.successful_evaluations);

    for (variant, stats) in [
        (Variant::Model1, &report.model_comparison.model1),
        (Variant::Model2, &report.model_comparison.model2),
    ] {
        println!("\n{}:", config.variant_name(variant));
        println!("  Average score: {:.2}/10", stats.average_overall_score);
        println!("  Successful evaluations: {}", stats.successful_evaluations);
    }

    match overview.winner.variant() {
        None => println!("\nResult: Tie"),
        Some(variant) => {
            println!(
                "\nWinner: {} ({:.2}/10)",
                config.variant_name(variant),
                overview.winner_score
            );
            println!("Score difference: {:.2}", overview.score_difference);
        }
    }

    if !report.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &report.recommendations {
            println!("   - {recommendation}");
        }
    }
    println!("{}", "=".repeat(70));
}

pub fn print_reliability(report: &PassAtKReport, extremes: &Extremes) {
    println!("\n--- pass@k Metrics ---");
    println!("Images with successful judgments: {}", report.total_images);
    for (threshold, rates) in &report.pass_at_k_metrics {
        let formatted: Vec<String> = rates
            .iter()
            .map(|(label, rate)| format!("{label}={rate:.3}"))
            .collect();
        println!("  {threshold}: {}", formatted.join("  "));
    }

    println!("\n--- Best Results ---");
    for entry in &extremes.best {
        println!(
            "  {} ({}): {}/10",
            entry.image_name,
            entry.variant.label(),
            entry.overall_score
        );
    }
    println!("\n--- Worst Results ---");
    for entry in &extremes.worst {
        println!(
            "  {} ({}): {}/10",
            entry.image_name,
            entry.variant.label(),
            entry.overall_score
        );
    }
}
