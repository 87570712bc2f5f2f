//! Learning progress model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::question::Difficulty;
use crate::Time;

/// A learner's progress on one module.
///
/// `answer_history` elements stay raw JSON: the progress validator only
/// shallow-checks them, and full validation belongs to the dedicated
/// answer-history validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    /// Owning user
    pub user_id: String,

    /// Module the progress belongs to
    pub module_id: String,

    /// Kind of learning session (see [`SessionType`] for the known values;
    /// kept as text because the upstream vocabulary drifts)
    pub session_type: String,

    /// Questions answered so far
    pub questions_answered: u64,

    /// Correct answers so far (never exceeds `questions_answered`)
    pub correct_answers: u64,

    /// Total questions in the session
    pub total_questions: u64,

    /// Whether the session is finished
    pub completed: bool,

    /// Last update timestamp (upstream sends text or date strings)
    pub last_updated: String,

    /// Seconds spent in the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<f64>,

    /// Mastery score in [0, 100]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastery_level: Option<f64>,

    /// Consecutive-correct streak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u64>,

    /// Current difficulty level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<Difficulty>,

    /// Raw answer history records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_history: Option<Vec<Value>>,
}

impl LearningProgress {
    /// Parse `last_updated` as a UTC instant.
    ///
    /// `None` when the upstream sent something other than an RFC 3339
    /// string; the raw text stays available in `last_updated`.
    pub fn updated_at(&self) -> Option<Time> {
        chrono::DateTime::parse_from_rfc3339(&self.last_updated)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

/// Classification of a learning interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Free practice
    Practice,
    /// Scored quiz
    Quiz,
    /// Review of past material
    Review,
    /// Feedback session
    Feedback,
}

impl SessionType {
    /// Stable wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Practice => "practice",
            SessionType::Quiz => "quiz",
            SessionType::Review => "review",
            SessionType::Feedback => "feedback",
        }
    }

    /// Parse a wire identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "practice" => Some(SessionType::Practice),
            "quiz" => Some(SessionType::Quiz),
            "review" => Some(SessionType::Review),
            "feedback" => Some(SessionType::Feedback),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(last_updated: &str) -> LearningProgress {
        LearningProgress {
            user_id: "u-1".to_string(),
            module_id: "mod-1".to_string(),
            session_type: "practice".to_string(),
            questions_answered: 3,
            correct_answers: 2,
            total_questions: 5,
            completed: false,
            last_updated: last_updated.to_string(),
            time_spent: None,
            mastery_level: None,
            streak: None,
            current_level: None,
            answer_history: None,
        }
    }

    #[test]
    fn test_updated_at_parses_rfc3339() {
        let at: Time = progress("2025-01-10T09:00:00Z").updated_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2025-01-10T09:00:00+00:00");
    }

    #[test]
    fn test_updated_at_tolerates_loose_text() {
        assert!(progress("last Tuesday").updated_at().is_none());
    }
}
