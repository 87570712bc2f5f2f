//! Typed conversion on top of the boolean validators.
//!
//! Validate first, then decode into the typed entity. `None` means the
//! payload failed validation or strict decoding; callers decide whether
//! that is a reject, a retry, or a regeneration request.

use serde::de::DeserializeOwned;
use serde_json::Value;
use studygate_core::{
    AnswerEvaluation, AnswerHistoryItem, LearningProgress, LearningQuestion, ModuleDetail,
};
use tracing::debug;

fn decode<T: DeserializeOwned>(kind: &str, value: &Value) -> Option<T> {
    match serde_json::from_value(value.clone()) {
        Ok(entity) => Some(entity),
        Err(err) => {
            debug!("{} passed validation but failed decoding: {}", kind, err);
            None
        }
    }
}

/// Validate and decode a module payload.
pub fn parse_module_detail(value: &Value) -> Option<ModuleDetail> {
    crate::validate_module_detail(value)
        .then(|| decode("ModuleDetail", value))
        .flatten()
}

/// Validate and decode a question payload.
pub fn parse_learning_question(value: &Value) -> Option<LearningQuestion> {
    crate::validate_learning_question(value)
        .then(|| decode("LearningQuestion", value))
        .flatten()
}

/// Validate and decode an evaluation payload.
pub fn parse_answer_evaluation(value: &Value) -> Option<AnswerEvaluation> {
    crate::validate_answer_evaluation(value)
        .then(|| decode("AnswerEvaluation", value))
        .flatten()
}

/// Validate and decode one answer history record.
pub fn parse_answer_history_item(value: &Value) -> Option<AnswerHistoryItem> {
    crate::validate_answer_history_item(value)
        .then(|| decode("AnswerHistoryItem", value))
        .flatten()
}

/// Validate and decode a progress payload.
pub fn parse_learning_progress(value: &Value) -> Option<LearningProgress> {
    crate::validate_learning_progress(value)
        .then(|| decode("LearningProgress", value))
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_round_trips_valid_payloads() {
        let payload = json!({
            "id": "q-1",
            "question": "借用とは?",
            "expectedAnswer": "所有権を移さない参照",
            "difficulty": "beginner",
        });

        let question = parse_learning_question(&payload).unwrap();
        assert_eq!(question.id, "q-1");
        assert_eq!(
            question.difficulty,
            Some(studygate_core::Difficulty::Beginner)
        );
    }

    #[test]
    fn test_parse_rejects_what_validation_rejects() {
        let payload = json!({"id": "q-1", "question": "", "expectedAnswer": "x"});
        assert!(parse_learning_question(&payload).is_none());
    }

    #[test]
    fn test_parse_module_keeps_raw_resources() {
        let payload = json!({
            "id": "mod-1",
            "title": "並行性",
            "description": "スレッドとチャネル",
            "content": [],
            "resources": [{"url": "https://example.com"}, "garbage"],
        });

        let module = parse_module_detail(&payload).unwrap();
        // Malformed records survive parsing; the extractor filters them.
        assert_eq!(module.resources.unwrap().len(), 2);
    }

    #[test]
    fn test_parse_evaluation() {
        let payload = json!({"isCorrect": false, "score": 40, "feedback": "要復習"});
        let eval = parse_answer_evaluation(&payload).unwrap();
        assert!(!eval.is_correct);
        assert_eq!(eval.score, 40.0);
    }
}
