//! Error taxonomy and failure classification.
//!
//! A closed tagged union of error kinds plus the classification,
//! retryability, and friendly-message functions the rest of the system
//! consults before deciding to retry, regenerate, or surface a failure.

#![warn(missing_docs)]

mod taxonomy;
mod classify;

pub use taxonomy::{StudyError, FETCH_FAILED_MARKER, RATE_LIMIT_CODE};
pub use classify::{
    classify, classify_any, friendly_message, friendly_message_any, is_retryable,
    is_retryable_any, ErrorCategory,
};
