//! Resource extraction and relevance ranking.
//!
//! Pulls candidate resources out of generated module content, normalizes
//! their type against a fixed keyword table, and re-ranks them for the
//! section the learner is currently reading. Everything here is a
//! deterministic, pure function of its input.

#![warn(missing_docs)]

mod extract;
mod rank;

pub use extract::{
    extract_resources, map_resource_type, MODULE_DEFAULT_RELEVANCE, SECTION_DEFAULT_RELEVANCE,
};
pub use rank::{group_by_type, relevant_resources, DEFAULT_RESOURCE_LIMIT, SECTION_BOOST};
