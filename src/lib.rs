//! Evaluation pipeline for comparing two vision-language models on UI code
//! generation from mobile screenshots.
//!
//! An LLM judge scores each generated artifact against its reference image
//! on five fixed criteria; the pipeline aggregates those judgments into
//! per-variant summaries, pass@k reliability metrics, a head-to-head
//! comparison, and persisted reports.

pub mod cli;
pub mod collector;
pub mod commands;
pub mod compare;
pub mod config;
pub mod images;
pub mod judge;
pub mod output;
pub mod reliability;
pub mod report;
pub mod results;
pub mod summary;
pub mod utils;
