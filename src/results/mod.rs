pub mod store;
pub mod types;

#[cfg(test)]
pub mod test_helpers;

pub use store::{ResultsStore, SNAPSHOT_FILENAME};
pub use types::{
    EvaluationSnapshot, FailedJudgment, JudgmentOutcome, JudgmentRecord, RecordMeta, RunMeta,
    Variant,
};
