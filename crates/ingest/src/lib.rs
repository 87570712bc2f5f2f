//! Ingestion boundary between the AI content service and the application.
//!
//! The provider trait keeps transport out of scope; the service wraps any
//! provider with validation, resource ranking, caching, and the sanctioned
//! single-retry policy.

#![warn(missing_docs)]

mod provider;
mod service;

pub use provider::{ContentProvider, IngestConfig};
pub use service::IngestService;
