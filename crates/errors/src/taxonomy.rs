//! The closed hierarchy of error kinds.

/// Machine-readable code the AI service attaches when it rate-limits.
pub const RATE_LIMIT_CODE: &str = "RATE_LIMIT";

/// Substring marking a generic fetch failure in opaque error messages.
pub const FETCH_FAILED_MARKER: &str = "failed to fetch";

/// Errors that can occur between the AI service, the data store, and the
/// ingestion boundary.
///
/// Classification switches on the variant tag; the `Display` output is the
/// per-kind formatted message. User-facing text comes from
/// [`crate::friendly_message`], never from `Display` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyError {
    /// Authentication or session failure
    Authentication {
        /// What failed
        message: String,
    },

    /// Network-level failure reaching a collaborator
    Network {
        /// What failed
        message: String,
    },

    /// Failure reported by the AI content service
    Service {
        /// What failed
        message: String,
        /// Machine-readable code from the service, when it sent one
        code: Option<String>,
    },

    /// A payload failed validation at the ingestion boundary
    Validation {
        /// What failed
        message: String,
        /// Offending field, when known
        field: Option<String>,
    },

    /// Content generation produced nothing usable
    ContentGeneration {
        /// What failed
        message: String,
        /// Originating generator, when known
        source: Option<String>,
    },

    /// Anything that fits no other kind
    General {
        /// What failed
        message: String,
    },
}

// Display/Error are implemented by hand because thiserror would treat the
// `source` field on `ContentGeneration` as an implicit error source, and
// `String` does not implement `std::error::Error`.
impl std::fmt::Display for StudyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudyError::Authentication { message } => {
                write!(f, "authentication error: {message}")
            }
            StudyError::Network { message } => write!(f, "network error: {message}"),
            StudyError::Service { message, .. } => write!(f, "ai service error: {message}"),
            StudyError::Validation { message, .. } => write!(f, "validation error: {message}"),
            StudyError::ContentGeneration { message, .. } => {
                write!(f, "content generation error: {message}")
            }
            StudyError::General { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for StudyError {}

impl StudyError {
    /// Authentication failure.
    pub fn authentication(message: impl Into<String>) -> Self {
        StudyError::Authentication {
            message: message.into(),
        }
    }

    /// Network failure.
    pub fn network(message: impl Into<String>) -> Self {
        StudyError::Network {
            message: message.into(),
        }
    }

    /// AI service failure, optionally with its machine-readable code.
    pub fn service(message: impl Into<String>, code: Option<String>) -> Self {
        StudyError::Service {
            message: message.into(),
            code,
        }
    }

    /// A rate-limited AI service failure.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        StudyError::Service {
            message: message.into(),
            code: Some(RATE_LIMIT_CODE.to_string()),
        }
    }

    /// Validation failure, optionally naming the offending field.
    pub fn validation(message: impl Into<String>, field: Option<String>) -> Self {
        StudyError::Validation {
            message: message.into(),
            field,
        }
    }

    /// Content generation failure, optionally naming the generator.
    pub fn content_generation(message: impl Into<String>, source: Option<String>) -> Self {
        StudyError::ContentGeneration {
            message: message.into(),
            source,
        }
    }

    /// Generic failure.
    pub fn general(message: impl Into<String>) -> Self {
        StudyError::General {
            message: message.into(),
        }
    }

    /// The raw message this error carries.
    pub fn message(&self) -> &str {
        match self {
            StudyError::Authentication { message }
            | StudyError::Network { message }
            | StudyError::Service { message, .. }
            | StudyError::Validation { message, .. }
            | StudyError::ContentGeneration { message, .. }
            | StudyError::General { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_per_kind() {
        let err = StudyError::validation("score out of range", Some("score".into()));
        assert_eq!(err.to_string(), "validation error: score out of range");

        let err = StudyError::general("something odd");
        assert_eq!(err.to_string(), "something odd");
    }

    #[test]
    fn test_rate_limited_carries_the_code() {
        match StudyError::rate_limited("slow down") {
            StudyError::Service { code, .. } => assert_eq!(code.as_deref(), Some(RATE_LIMIT_CODE)),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
