use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Get a Command for ui-code-eval
pub fn ui_code_eval() -> Command {
    cargo_bin_cmd!("ui-code-eval")
}

/// Write a config pointing all directories into the test workspace.
pub fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("eval.toml");
    let content = format!(
        r#"
images_dir = "{base}/images"
code_dir = "{base}/output"
results_dir = "{base}/results"
model1_name = "alpha-model"
model2_name = "beta-model"
"#,
        base = dir.display()
    );
    std::fs::write(&path, content).unwrap();
    path
}

fn record(image: &str, variant: &str, score: f64) -> serde_json::Value {
    let criterion = serde_json::json!({"score": score, "explanation": "checked"});
    serde_json::json!({
        "element_detection": criterion.clone(),
        "structural_accuracy": criterion.clone(),
        "layout_accuracy": criterion.clone(),
        "code_quality": criterion.clone(),
        "completeness": criterion,
        "overall_score": score,
        "summary": format!("{image} via {variant}"),
        "strengths": ["components"],
        "weaknesses": ["spacing"],
        "meta": {
            "image_name": format!("{image}.png"),
            "code_filename": format!("{image}_{variant}.jsx"),
            "variant": variant
        }
    })
}

fn variant_summary(count: usize, mean: f64) -> serde_json::Value {
    serde_json::json!({
        "count": count,
        "successful_evaluations": count,
        "average_overall_score": mean,
        "average_criteria_scores": {
            "element_detection": mean,
            "structural_accuracy": mean,
            "layout_accuracy": mean,
            "code_quality": mean,
            "completeness": mean
        }
    })
}

/// A two-image snapshot with model1 ahead of model2 (8.0 vs 6.0 means).
pub fn write_snapshot(dir: &Path) -> std::path::PathBuf {
    let snapshot = serde_json::json!({
        "evaluation_summary": {
            "total_evaluations": 4,
            "successful_evaluations": 4,
            "failed_evaluations": 0,
            "model1_summary": variant_summary(2, 8.0),
            "model2_summary": variant_summary(2, 6.0),
            "overall_summary": variant_summary(4, 7.0)
        },
        "detailed_results": [
            record("ui_001", "model1", 8.0),
            record("ui_001", "model2", 5.0),
            record("ui_002", "model1", 8.0),
            record("ui_002", "model2", 7.0)
        ],
        "meta": {
            "total_images": 2,
            "total_evaluations": 4,
            "model_used": "claude-test",
            "images_dir": "./images",
            "code_dir": "./output"
        }
    });

    let path = dir.join("evaluation_results.json");
    std::fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();
    path
}
