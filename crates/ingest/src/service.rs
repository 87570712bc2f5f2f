//! Ingestion service: validate, rank, cache, retry.

use serde_json::Value;
use studygate_core::{AnswerEvaluation, LearningQuestion, ModuleDetail, RelatedResource};
use studygate_errors::{is_retryable, StudyError};
use studygate_resilience::{timed, TtlCache};
use studygate_resources::{extract_resources, relevant_resources};
use studygate_validation::{
    parse_answer_evaluation, parse_learning_question, parse_module_detail,
};
use tracing::{debug, warn};

use crate::provider::{ContentProvider, IngestConfig};

use std::future::Future;

/// Wraps a [`ContentProvider`] with the ingestion policy: every payload
/// passes the validator before it is trusted, modules are cached by topic
/// with a TTL, and retryable failures get at most one automatic retry.
pub struct IngestService<P> {
    provider: P,
    config: IngestConfig,
    modules: TtlCache<ModuleDetail>,
}

impl<P: ContentProvider> IngestService<P> {
    /// Wrap a provider with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, IngestConfig::default())
    }

    /// Wrap a provider with a custom configuration.
    pub fn with_config(provider: P, config: IngestConfig) -> Self {
        let modules = TtlCache::with_max_age(config.cache_max_age);
        Self {
            provider,
            config,
            modules,
        }
    }

    /// Drop all cached modules.
    pub fn clear_cache(&mut self) {
        self.modules.clear();
    }

    /// Run one provider call with timing and the sanctioned retry policy:
    /// a single retry, and only when the taxonomy approves.
    async fn request<F, Fut>(&self, label: &str, call: F) -> Result<Value, StudyError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Value, StudyError>>,
    {
        match timed(label, call()).await {
            Ok(value) => Ok(value),
            Err(err) if self.config.retry_once && is_retryable(&err) => {
                warn!("{} hit a retryable error, retrying once: {}", label, err);
                timed(label, call()).await
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch (or reuse) a validated module for a topic.
    pub async fn fetch_module(&mut self, topic: &str) -> Result<ModuleDetail, StudyError> {
        if let Some(cached) = self.modules.get(topic) {
            debug!("module cache hit for topic {}", topic);
            return Ok(cached.clone());
        }

        let raw = self
            .request("generate_module", || self.provider.generate_module(topic))
            .await?;
        let module = parse_module_detail(&raw).ok_or_else(|| {
            StudyError::validation("生成されたモジュールの形式が不正です", None)
        })?;

        self.modules.set(topic, module.clone());
        Ok(module)
    }

    /// Fetch questions for a module, keeping only the valid ones.
    ///
    /// Individual malformed questions are dropped; an unusable payload or
    /// an empty survivor list is a validation failure.
    pub async fn fetch_questions(
        &self,
        module_id: &str,
        count: usize,
    ) -> Result<Vec<LearningQuestion>, StudyError> {
        let raw = self
            .request("generate_questions", || {
                self.provider.generate_questions(module_id, count)
            })
            .await?;

        let records = raw.as_array().ok_or_else(|| {
            StudyError::validation("質問リストの形式が不正です", None)
        })?;

        let questions: Vec<LearningQuestion> = records
            .iter()
            .filter_map(parse_learning_question)
            .collect();
        if questions.len() < records.len() {
            debug!(
                "dropped {} invalid question records",
                records.len() - questions.len()
            );
        }

        if questions.is_empty() {
            return Err(StudyError::validation(
                "有効な質問が生成されませんでした",
                None,
            ));
        }
        Ok(questions)
    }

    /// Evaluate an answer and validate the verdict.
    pub async fn evaluate(
        &self,
        question: &LearningQuestion,
        answer: &str,
    ) -> Result<AnswerEvaluation, StudyError> {
        let raw = self
            .request("evaluate_answer", || {
                self.provider.evaluate_answer(question, answer)
            })
            .await?;

        parse_answer_evaluation(&raw).ok_or_else(|| {
            StudyError::validation("評価結果の形式が不正です", Some("score".to_string()))
        })
    }

    /// Extract and rank a module's resources for the section being read.
    pub fn module_resources(
        &self,
        module: &ModuleDetail,
        current_section: Option<&str>,
    ) -> Vec<RelatedResource> {
        let extracted = extract_resources(module);
        relevant_resources(&extracted, current_section, self.config.resource_limit)
    }
}
