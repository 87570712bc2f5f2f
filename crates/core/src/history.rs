//! Answer history model.

use serde::{Deserialize, Serialize};

use crate::Time;

/// One answered question in a learner's history.
///
/// Optional fields are independent of each other: a record may carry any
/// subset of them, but a present field must match its declared type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerHistoryItem {
    /// Unique identifier
    pub id: String,

    /// Identifier of the answered question
    pub question_id: String,

    /// Question text
    pub question: String,

    /// The learner's answer
    pub user_answer: String,

    /// The expected answer
    pub correct_answer: String,

    /// Whether the answer was correct
    pub is_correct: bool,

    /// Score in [0, 100]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Feedback text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    /// When the answer was given (upstream sends text or date strings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Seconds spent answering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<f64>,

    /// Self-reported confidence in [0, 100]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl AnswerHistoryItem {
    /// Parse `timestamp` as a UTC instant.
    ///
    /// The upstream sends RFC 3339 strings when it sends anything at all;
    /// an absent or unparseable timestamp is `None`, never an error.
    pub fn recorded_at(&self) -> Option<Time> {
        let raw = self.timestamp.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(timestamp: Option<&str>) -> AnswerHistoryItem {
        AnswerHistoryItem {
            id: "h-1".to_string(),
            question_id: "q-1".to_string(),
            question: "所有権とは?".to_string(),
            user_answer: "値を所有する束縛".to_string(),
            correct_answer: "値の解放責任を持つ束縛".to_string(),
            is_correct: true,
            score: None,
            feedback: None,
            timestamp: timestamp.map(str::to_string),
            time_spent: None,
            confidence: None,
            category: None,
        }
    }

    #[test]
    fn test_recorded_at_parses_rfc3339() {
        let at: Time = item(Some("2025-01-10T09:00:00+09:00")).recorded_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2025-01-10T00:00:00+00:00");
    }

    #[test]
    fn test_recorded_at_tolerates_missing_or_malformed() {
        assert!(item(None).recorded_at().is_none());
        assert!(item(Some("昨日の朝")).recorded_at().is_none());
    }
}
