//! Fallback parsing for judge responses.
//!
//! Judges wrap their JSON in explanatory prose inconsistently, so extraction
//! tries three strategies in a fixed order: the whole text as JSON, then a
//! fenced ```json block, then the span between the first and last braces.
//! The order is a contract; callers that exhaust it downgrade the pair to a
//! failed judgment carrying the raw text.

use crate::results::JudgmentOutcome;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to parse JSON from judge response")]
pub struct ParseError {
    raw: String,
}

impl ParseError {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }
}

fn fenced_json_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```json\n(\{.*?\})\n```").expect("valid regex"))
}

/// Extract a judgment from free-text judge output.
///
/// A response whose JSON carries an `error` key parses as
/// [`JudgmentOutcome::Failure`]; that is a successful parse of a judge-side
/// refusal, not a `ParseError`.
pub fn parse_judgment(response: &str) -> Result<JudgmentOutcome, ParseError> {
    if let Ok(outcome) = serde_json::from_str::<JudgmentOutcome>(response) {
        return Ok(outcome);
    }

    if let Some(caps) = fenced_json_regex().captures(response) {
        if let Ok(outcome) = serde_json::from_str::<JudgmentOutcome>(&caps[1]) {
            return Ok(outcome);
        }
    }

    if let (Some(first), Some(last)) = (response.find('{'), response.rfind('}')) {
        if first < last {
            if let Ok(outcome) = serde_json::from_str::<JudgmentOutcome>(&response[first..=last]) {
                return Ok(outcome);
            }
        }
    }

    Err(ParseError {
        raw: response.to_string(),
    })
}
