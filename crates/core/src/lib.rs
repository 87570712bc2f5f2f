//! studygate core data models.
//!
//! This crate defines the learning-domain entities exchanged with the
//! AI content-generation service and the backend data store. All of them
//! are ephemeral: built fresh from each upstream response, validated once
//! at the ingestion boundary, and replaced on the next fetch.

#![warn(missing_docs)]

// Generated learning content
mod module;
mod question;
mod evaluation;

// Learner state
mod history;
mod progress;

// Related resources
mod resource;

pub use module::{ModuleDetail, ModuleSection};
pub use question::{Difficulty, LearningQuestion};
pub use evaluation::AnswerEvaluation;
pub use history::AnswerHistoryItem;
pub use progress::{LearningProgress, SessionType};
pub use resource::{RelatedResource, ResourceType};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
