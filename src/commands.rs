//! Subcommand handlers.

use crate::collector::Collector;
use crate::compare::{compare, ComparisonResult};
use crate::config::Config;
use crate::judge::AnthropicJudge;
use crate::output;
use crate::reliability::{extremes, pass_at_k};
use crate::report;
use crate::results::ResultsStore;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn handle_run(
    mut config: Config,
    images_dir: Option<String>,
    code_dir: Option<String>,
    results_dir: Option<String>,
    judge_model: Option<String>,
) -> Result<()> {
    if let Some(dir) = images_dir {
        config.images_dir = dir;
    }
    if let Some(dir) = code_dir {
        config.code_dir = dir;
    }
    if let Some(dir) = results_dir {
        config.results_dir = dir;
    }
    if let Some(model) = judge_model {
        config.judge.model = model;
    }

    let api_key = std::env::var("ANTHROPIC_API_KEY")
        .context("ANTHROPIC_API_KEY environment variable is required")?;

    let judge = AnthropicJudge::new(
        config.judge.api_base.clone(),
        api_key,
        config.judge.model.clone(),
        config.judge.max_tokens,
        config.judge.temperature,
    );

    let store = ResultsStore::new(&config.results_dir);
    let snapshot = Collector::new(&config, judge).run(&store).await?;
    output::print_run_summary(&snapshot);

    let report_path = Path::new(&config.results_dir).join("detailed_report.txt");
    report::save_report(&snapshot, &report_path)?;
    println!("Report saved to {}", report_path.display());

    match compare(&snapshot, &config) {
        ComparisonResult::Report(comparison) => {
            let path = store.save_comparison_report(&comparison)?;
            println!("Comparison report saved to {}", path.display());
            output::print_comparison_summary(&comparison, &config);
        }
        ComparisonResult::InsufficientData { error } => {
            println!("\nComparison skipped: {error}");
        }
    }

    Ok(())
}

pub fn handle_analyze(config: &Config, snapshot_path: &Path) -> Result<()> {
    let store = ResultsStore::new(&config.results_dir);
    let snapshot = store.load_snapshot(snapshot_path)?;

    let reliability = pass_at_k(&snapshot.detailed_results, &config.analysis);
    let extremes = extremes(&snapshot.detailed_results, config.analysis.extremes_count);
    output::print_reliability(&reliability, &extremes);
    Ok(())
}

pub fn handle_compare(config: &Config, snapshot_path: &Path) -> Result<()> {
    let store = ResultsStore::new(&config.results_dir);
    let snapshot = store.load_snapshot(snapshot_path)?;

    match compare(&snapshot, config) {
        ComparisonResult::Report(comparison) => {
            let path = store.save_comparison_report(&comparison)?;
            println!("Comparison report saved to {}", path.display());
            output::print_comparison_summary(&comparison, config);
        }
        ComparisonResult::InsufficientData { error } => {
            println!("Comparison skipped: {error}");
        }
    }
    Ok(())
}

pub fn handle_report(
    config: &Config,
    snapshot_path: &Path,
    out: Option<&Path>,
) -> Result<()> {
    let store = ResultsStore::new(&config.results_dir);
    let snapshot = store.load_snapshot(snapshot_path)?;

    match out {
        Some(path) => {
            report::save_report(&snapshot, path)?;
            println!("Report saved to {}", path.display());
        }
        None => print!("{}", report::render(&snapshot)),
    }
    Ok(())
}
