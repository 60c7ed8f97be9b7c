//! Judging collaborator boundary.
//!
//! Holds the verdict data model, the HTTP judge client, and the fallback
//! parser that recovers JSON verdicts from prose-wrapped responses.

pub mod client;
pub mod parse;
pub mod types;

pub use client::{AnthropicJudge, JudgeClient, JudgeRequest};
pub use parse::{parse_judgment, ParseError};
pub use types::{Criterion, CriterionScore, JudgeVerdict};
