//! Judgment collection.
//!
//! Walks the images directory, pairs each screenshot with the generated
//! artifacts for both variants via the `<stem>_<suffix>.jsx` naming
//! convention, and judges every pair sequentially. A pair is never dropped:
//! any judge failure becomes a failed record. The full record set is
//! persisted as one snapshot per run.

use crate::config::Config;
use crate::images;
use crate::judge::{parse_judgment, JudgeClient, JudgeRequest};
use crate::results::{
    EvaluationSnapshot, FailedJudgment, JudgmentOutcome, JudgmentRecord, RecordMeta, ResultsStore,
    RunMeta, Variant,
};
use crate::summary::summarize;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct Collector<'a, J> {
    config: &'a Config,
    judge: J,
}

impl<'a, J: JudgeClient> Collector<'a, J> {
    pub fn new(config: &'a Config, judge: J) -> Self {
        Self { config, judge }
    }

    /// Judge every (image, artifact) pair and persist the run snapshot.
    ///
    /// Images are visited in sorted order and variants in declaration order,
    /// so the snapshot layout is deterministic run to run.
    pub async fn run(&self, store: &ResultsStore) -> Result<EvaluationSnapshot> {
        let images_dir = Path::new(&self.config.images_dir);
        let image_files = images::list_images(images_dir)?;
        if image_files.is_empty() {
            anyhow::bail!("No images found in {}", images_dir.display());
        }

        tracing::info!(
            images = image_files.len(),
            judge_model = self.judge.model_name(),
            "starting evaluation run"
        );

        let mut records = Vec::new();
        for image_path in &image_files {
            let candidates = self.find_candidates(image_path);
            if candidates.is_empty() {
                tracing::warn!(image = %image_path.display(), "no generated code found, skipping");
                continue;
            }

            for (variant, code_path) in candidates {
                let record = self.judge_pair(image_path, variant, &code_path).await;
                match &record.outcome {
                    JudgmentOutcome::Success(verdict) => {
                        tracing::info!(
                            image = %record.meta.image_name,
                            variant = %variant,
                            score = verdict.overall_score,
                            "judged"
                        );
                    }
                    JudgmentOutcome::Failure(failure) => {
                        tracing::warn!(
                            image = %record.meta.image_name,
                            variant = %variant,
                            error = %failure.error,
                            "judgment failed"
                        );
                    }
                }
                records.push(record);
            }
        }

        let snapshot = EvaluationSnapshot {
            evaluation_summary: summarize(&records),
            meta: RunMeta {
                total_images: image_files.len(),
                total_evaluations: records.len(),
                model_used: self.judge.model_name().to_string(),
                images_dir: self.config.images_dir.clone(),
                code_dir: self.config.code_dir.clone(),
            },
            detailed_results: records,
        };

        let path = store.save_snapshot(&snapshot)?;
        tracing::info!(path = %path.display(), "snapshot saved");
        Ok(snapshot)
    }

    /// Generated artifacts for an image, in variant order. The filename
    /// suffix is the join key and must match exactly.
    fn find_candidates(&self, image_path: &Path) -> Vec<(Variant, PathBuf)> {
        let Some(stem) = image_path.file_stem().and_then(|s| s.to_str()) else {
            return Vec::new();
        };

        Variant::BOTH
            .into_iter()
            .filter_map(|variant| {
                let candidate = Path::new(&self.config.code_dir)
                    .join(format!("{stem}_{}.jsx", variant.suffix()));
                candidate.exists().then_some((variant, candidate))
            })
            .collect()
    }

    async fn judge_pair(
        &self,
        image_path: &Path,
        variant: Variant,
        code_path: &Path,
    ) -> JudgmentRecord {
        let image_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let code_filename = code_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let meta = RecordMeta {
            image_name: image_name.clone(),
            code_filename,
            variant,
        };

        let outcome = self.judge_outcome(image_path, variant, code_path, &image_name).await;
        JudgmentRecord { outcome, meta }
    }

    async fn judge_outcome(
        &self,
        image_path: &Path,
        variant: Variant,
        code_path: &Path,
        image_name: &str,
    ) -> JudgmentOutcome {
        let image_base64 = match images::encode_image_to_base64(image_path) {
            Ok(encoded) => encoded,
            Err(e) => return JudgmentOutcome::Failure(FailedJudgment::new(format!("{e:#}"))),
        };

        let generated_code = match std::fs::read_to_string(code_path) {
            Ok(code) => code,
            Err(e) => {
                return JudgmentOutcome::Failure(FailedJudgment::new(format!(
                    "Failed to read code file {}: {e}",
                    code_path.display()
                )))
            }
        };

        let mime_type = images::image_mime_type(image_path);
        let request = JudgeRequest {
            image_base64: &image_base64,
            image_mime_type: &mime_type,
            image_name,
            generated_code: &generated_code,
            model_label: variant.label(),
        };

        let response = match self.judge.judge(request).await {
            Ok(text) => text,
            Err(e) => {
                return JudgmentOutcome::Failure(FailedJudgment::new(format!(
                    "API call failed: {e:#}"
                )))
            }
        };

        match parse_judgment(&response) {
            Ok(outcome) => outcome,
            Err(parse_error) => JudgmentOutcome::Failure(FailedJudgment::with_raw(
                "Failed to parse JSON response",
                parse_error.into_raw(),
            )),
        }
    }
}
