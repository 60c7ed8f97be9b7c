use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "ui-code-eval.toml";

/// Judge endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 3000,
            temperature: 0.7,
        }
    }
}

/// Policy constants for aggregation, comparison, and reliability analysis.
///
/// The tie threshold applies to the overall score gap; the strength margin
/// is deliberately stricter and applies per criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub tie_threshold: f64,
    pub strength_margin: f64,
    pub pass_thresholds: Vec<f64>,
    pub k_values: Vec<usize>,
    pub extremes_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tie_threshold: 0.5,
            strength_margin: 0.2,
            pass_thresholds: vec![5.0, 6.0, 7.0, 8.0, 9.0],
            k_values: vec![1, 3, 5],
            extremes_count: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub images_dir: String,
    pub code_dir: String,
    pub results_dir: String,
    /// Display names for the two competing generators, used in
    /// recommendations and strength attributions.
    pub model1_name: String,
    pub model2_name: String,
    #[serde(default)]
    pub judge: JudgeConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: "./dataset/mobile_ui_design_images".to_string(),
            code_dir: "./output".to_string(),
            results_dir: "./evaluation_results".to_string(),
            model1_name: "gemma3:4b-it-qat".to_string(),
            model2_name: "qwen2:7b".to_string(),
            judge: JudgeConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Config {
    pub fn load_or_default() -> Self {
        let config_path = Path::new(CONFIG_FILE);

        if config_path.exists() {
            match Self::load(config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {:#}. Using defaults.", CONFIG_FILE, e);
                }
            }
        }

        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn variant_name(&self, variant: crate::results::Variant) -> &str {
        match variant {
            crate::results::Variant::Model1 => &self.model1_name,
            crate::results::Variant::Model2 => &self.model2_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Variant;

    #[test]
    fn defaults_carry_documented_policy_constants() {
        let config = Config::default();
        assert_eq!(config.analysis.tie_threshold, 0.5);
        assert_eq!(config.analysis.strength_margin, 0.2);
        assert_eq!(config.analysis.pass_thresholds, vec![5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(config.analysis.k_values, vec![1, 3, 5]);
        assert_eq!(config.analysis.extremes_count, 3);
    }

    #[test]
    fn load_round_trips_through_toml() {
        let config = Config::default();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-config.toml");
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&path, content).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.images_dir, config.images_dir);
        assert_eq!(loaded.judge.model, config.judge.model);
        assert_eq!(loaded.analysis.k_values, config.analysis.k_values);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(
            &path,
            r#"
images_dir = "./imgs"
code_dir = "./gen"
results_dir = "./out"
model1_name = "alpha"
model2_name = "beta"
"#,
        )
        .unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.images_dir, "./imgs");
        assert_eq!(loaded.judge.max_tokens, 3000);
        assert_eq!(loaded.analysis.tie_threshold, 0.5);
    }

    #[test]
    fn variant_names_resolve_from_config() {
        let config = Config::default();
        assert_eq!(config.variant_name(Variant::Model1), "gemma3:4b-it-qat");
        assert_eq!(config.variant_name(Variant::Model2), "qwen2:7b");
    }
}
