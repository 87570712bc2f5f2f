//! Structural and semantic checks over raw upstream payloads.
//!
//! The AI service and the data store are schema-loose: any field may be
//! missing, mistyped, or extra. These predicates are the single gate a
//! payload passes before it is trusted downstream.

use serde_json::Value;
use studygate_core::Difficulty;

/// A required text field: present, a string, and non-empty.
fn non_empty_str(record: &Value, key: &str) -> bool {
    matches!(record.get(key), Some(Value::String(s)) if !s.is_empty())
}

/// An optional text field: absent or null is fine, anything present must
/// be a string.
fn optional_str(record: &Value, key: &str) -> bool {
    match record.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::String(_)) => true,
        Some(_) => false,
    }
}

/// An optional numeric field, with optional inclusive bounds.
fn optional_number(record: &Value, key: &str, min: Option<f64>, max: Option<f64>) -> bool {
    match record.get(key) {
        None | Some(Value::Null) => true,
        Some(value) => match value.as_f64() {
            Some(n) => min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi),
            None => false,
        },
    }
}

/// A required non-negative integer counter.
fn counter(record: &Value, key: &str) -> Option<u64> {
    record.get(key).and_then(Value::as_u64)
}

/// A score field: a number in [0, 100].
fn score_in_range(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| (0.0..=100.0).contains(&n))
}

/// Validate a generated module payload.
///
/// Requires non-empty `id`/`title`/`description` and an array-typed
/// `content` (possibly empty). Sections and resources are not checked
/// here; the resource extractor tolerates malformed records on its own.
pub fn validate_module_detail(value: &Value) -> bool {
    value.is_object()
        && non_empty_str(value, "id")
        && non_empty_str(value, "title")
        && non_empty_str(value, "description")
        && value.get("content").is_some_and(Value::is_array)
}

/// Validate a generated question payload.
pub fn validate_learning_question(value: &Value) -> bool {
    let difficulty_ok = match value.get("difficulty") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => Difficulty::parse(s).is_some(),
        Some(_) => false,
    };

    value.is_object()
        && non_empty_str(value, "id")
        && non_empty_str(value, "question")
        && non_empty_str(value, "expectedAnswer")
        && difficulty_ok
}

/// Validate an answer evaluation payload.
pub fn validate_answer_evaluation(value: &Value) -> bool {
    value.is_object()
        && value.get("isCorrect").is_some_and(Value::is_boolean)
        && value.get("score").is_some_and(score_in_range)
        && non_empty_str(value, "feedback")
}

/// Validate one answer history record.
///
/// The six mandatory fields must be present and well-typed; every optional
/// field is checked independently, and a present-but-wrong-typed optional
/// invalidates the whole record.
pub fn validate_answer_history_item(value: &Value) -> bool {
    let required = value.is_object()
        && non_empty_str(value, "id")
        && non_empty_str(value, "questionId")
        && non_empty_str(value, "question")
        && non_empty_str(value, "userAnswer")
        && non_empty_str(value, "correctAnswer")
        && value.get("isCorrect").is_some_and(Value::is_boolean);

    required
        && optional_number(value, "score", Some(0.0), Some(100.0))
        && optional_str(value, "feedback")
        && optional_str(value, "timestamp")
        && optional_number(value, "timeSpent", None, None)
        && optional_number(value, "confidence", Some(0.0), Some(100.0))
        && optional_str(value, "category")
}

/// Validate a whole answer history: the conjunction over its elements.
pub fn validate_answer_history(items: &[Value]) -> bool {
    items.iter().all(validate_answer_history_item)
}

/// Shallow check of an embedded history element: id-like fields plus a
/// boolean correctness flag. Full validation belongs to
/// [`validate_answer_history_item`] and is deliberately not repeated here.
fn shallow_history_item(value: &Value) -> bool {
    value.is_object()
        && non_empty_str(value, "id")
        && non_empty_str(value, "questionId")
        && value.get("isCorrect").is_some_and(Value::is_boolean)
}

/// Validate a learning progress payload.
///
/// Enforces the eight mandatory fields, counter non-negativity,
/// `correctAnswers <= questionsAnswered`, and the optional-field domains.
/// Embedded `answerHistory` elements are only shallow-checked.
pub fn validate_learning_progress(value: &Value) -> bool {
    if !value.is_object()
        || !non_empty_str(value, "userId")
        || !non_empty_str(value, "moduleId")
        || !non_empty_str(value, "sessionType")
        || !non_empty_str(value, "lastUpdated")
        || !value.get("completed").is_some_and(Value::is_boolean)
    {
        return false;
    }

    let answered = match counter(value, "questionsAnswered") {
        Some(n) => n,
        None => return false,
    };
    let correct = match counter(value, "correctAnswers") {
        Some(n) => n,
        None => return false,
    };
    if counter(value, "totalQuestions").is_none() || correct > answered {
        return false;
    }

    let current_level_ok = match value.get("currentLevel") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => Difficulty::parse(s).is_some(),
        Some(_) => false,
    };
    let streak_ok = match value.get("streak") {
        None | Some(Value::Null) => true,
        Some(v) => v.as_u64().is_some(),
    };
    let history_ok = match value.get("answerHistory") {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.iter().all(shallow_history_item),
        Some(_) => false,
    };

    optional_number(value, "timeSpent", None, None)
        && optional_number(value, "masteryLevel", Some(0.0), Some(100.0))
        && current_level_ok
        && streak_ok
        && history_ok
}
