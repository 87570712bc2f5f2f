//! Content provider abstraction.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use studygate_core::LearningQuestion;
use studygate_errors::StudyError;
use studygate_resilience::DEFAULT_MAX_AGE;
use studygate_resources::DEFAULT_RESOURCE_LIMIT;

/// The AI content-generation service, seen as an opaque collaborator.
///
/// Implementations own transport and prompt construction; they return raw
/// JSON payloads that nothing downstream trusts until validated.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generate a learning module for a topic.
    async fn generate_module(&self, topic: &str) -> Result<Value, StudyError>;

    /// Generate practice questions for a module.
    async fn generate_questions(&self, module_id: &str, count: usize)
        -> Result<Value, StudyError>;

    /// Evaluate a learner's answer to a question.
    async fn evaluate_answer(
        &self,
        question: &LearningQuestion,
        answer: &str,
    ) -> Result<Value, StudyError>;
}

/// Configuration for the ingestion service.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Lifetime of cached modules
    pub cache_max_age: Duration,

    /// Whether retryable failures get one automatic retry
    pub retry_once: bool,

    /// Maximum resources surfaced per ranking request
    pub resource_limit: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            cache_max_age: DEFAULT_MAX_AGE,
            retry_once: true,
            resource_limit: DEFAULT_RESOURCE_LIMIT,
        }
    }
}
