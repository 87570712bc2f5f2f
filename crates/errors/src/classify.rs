//! Classification, retryability, and friendly messages.
//!
//! These functions never panic and always produce a defined answer, even
//! for opaque values that did not come from the taxonomy.

use crate::taxonomy::{StudyError, FETCH_FAILED_MARKER, RATE_LIMIT_CODE};

/// Coarse failure category used by the UI and by retry/backoff policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-level failure
    Network,
    /// AI service / API failure
    Api,
    /// Authentication failure
    Auth,
    /// Validation failure
    Validation,
    /// Content generation failure
    Content,
    /// Everything else
    General,
}

impl ErrorCategory {
    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Api => "api",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Content => "content",
            ErrorCategory::General => "general",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a taxonomy error by its tag.
pub fn classify(error: &StudyError) -> ErrorCategory {
    match error {
        StudyError::Network { .. } => ErrorCategory::Network,
        StudyError::Service { .. } => ErrorCategory::Api,
        StudyError::Authentication { .. } => ErrorCategory::Auth,
        StudyError::Validation { .. } => ErrorCategory::Validation,
        StudyError::ContentGeneration { .. } => ErrorCategory::Content,
        StudyError::General { .. } => ErrorCategory::General,
    }
}

/// Classify an opaque error.
///
/// Dispatches on the tag when the value is a taxonomy error; otherwise
/// falls back to case-insensitive keyword sniffing of the rendered
/// message. The keyword check order is part of the contract.
pub fn classify_any(error: &anyhow::Error) -> ErrorCategory {
    if let Some(known) = error.downcast_ref::<StudyError>() {
        return classify(known);
    }

    let message = error.to_string().to_lowercase();
    if message.contains("network") || message.contains("connection") || message.contains("fetch") {
        ErrorCategory::Network
    } else if message.contains("auth") || message.contains("token") || message.contains("key") {
        ErrorCategory::Auth
    } else if message.contains("api") || message.contains("rate limit") {
        ErrorCategory::Api
    } else if message.contains("validation") || message.contains("invalid") {
        ErrorCategory::Validation
    } else if message.contains("content") || message.contains("generation") {
        ErrorCategory::Content
    } else {
        ErrorCategory::General
    }
}

/// Whether automatic retry is sanctioned for this error.
///
/// The single source of truth consulted by retry/backoff logic: network
/// failures, rate-limited service responses, and generic fetch failures
/// are retryable; everything else is terminal for the current operation.
pub fn is_retryable(error: &StudyError) -> bool {
    match error {
        StudyError::Network { .. } => true,
        StudyError::Service { code, .. } => code.as_deref() == Some(RATE_LIMIT_CODE),
        StudyError::General { message } => {
            message.to_lowercase().contains(FETCH_FAILED_MARKER)
        }
        _ => false,
    }
}

/// Retryability for opaque errors: downcast to the taxonomy when
/// possible, otherwise look for the fetch-failure marker.
pub fn is_retryable_any(error: &anyhow::Error) -> bool {
    match error.downcast_ref::<StudyError>() {
        Some(known) => is_retryable(known),
        None => error.to_string().to_lowercase().contains(FETCH_FAILED_MARKER),
    }
}

const FALLBACK_MESSAGE: &str = "エラーが発生しました。しばらくしてからもう一度お試しください。";
const UNKNOWN_MESSAGE: &str = "不明なエラーが発生しました。";

/// Map a taxonomy error to a localized, user-facing message.
///
/// Never exposes stack traces or internal codes; a rate-limited service
/// error gets the dedicated "try later" message.
pub fn friendly_message(error: &StudyError) -> String {
    match error {
        StudyError::Authentication { .. } => {
            "認証に失敗しました。もう一度ログインしてください。".to_string()
        }
        StudyError::Network { .. } => {
            "ネットワークに接続できません。通信環境を確認してください。".to_string()
        }
        StudyError::Service { code, .. } if code.as_deref() == Some(RATE_LIMIT_CODE) => {
            "リクエストが集中しています。しばらく待ってから再試行してください。".to_string()
        }
        StudyError::Service { .. } => {
            "AIサービスでエラーが発生しました。時間をおいて再試行してください。".to_string()
        }
        StudyError::Validation { field, .. } => match field {
            Some(name) => format!("入力内容に誤りがあります（{name}）。"),
            None => "入力内容に誤りがあります。".to_string(),
        },
        StudyError::ContentGeneration { .. } => {
            "コンテンツの生成に失敗しました。もう一度お試しください。".to_string()
        }
        StudyError::General { .. } => FALLBACK_MESSAGE.to_string(),
    }
}

/// Friendly message for opaque errors.
///
/// Taxonomy errors get their mapped message; anything else falls back to
/// a best-effort rendering of the value, and an empty rendering falls
/// back to the generic unknown-error message. Never panics.
pub fn friendly_message_any(error: &anyhow::Error) -> String {
    if let Some(known) = error.downcast_ref::<StudyError>() {
        return friendly_message(known);
    }

    let rendered = error.to_string();
    if rendered.trim().is_empty() {
        UNKNOWN_MESSAGE.to_string()
    } else {
        rendered
    }
}
