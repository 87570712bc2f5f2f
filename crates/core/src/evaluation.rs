//! Answer evaluation model.

use serde::{Deserialize, Serialize};

/// The AI service's judgement of a submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluation {
    /// Whether the answer was judged correct
    pub is_correct: bool,

    /// Score in [0, 100]
    pub score: f64,

    /// Feedback text shown to the learner
    pub feedback: String,
}
