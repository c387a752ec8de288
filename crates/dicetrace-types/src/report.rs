use serde::{Deserialize, Serialize};

use crate::repr::Repr;

/// Timing measured by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalStatistics {
    /// Wall-clock evaluation time in milliseconds.
    pub time_consumed_ms: u64,
}

/// Extra material attached to a completed evaluation: the step trace and
/// timing. The renderer only needs `representation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appendix {
    pub representation: Repr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<EvalStatistics>,
}

/// The value-or-error half of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok {
        /// Final value as the evaluator serialized it (scalar or list).
        value: serde_json::Value,
    },
    Error {
        /// Error category as reported by the evaluator (parse, runtime, ...).
        kind: String,
        message: String,
    },
}

/// A completed evaluation as received from the evaluator process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appendix: Option<Appendix>,
}
