//! Entity validators for the AI-service boundary.
//!
//! One pure predicate per entity kind. Validators never panic and never
//! error: a missing required field, a mistyped field, or a value outside
//! its documented range yields `false` and leaves the reject/retry decision
//! to the caller.

#![warn(missing_docs)]

mod checks;
mod parse;

pub use checks::{
    validate_answer_evaluation, validate_answer_history, validate_answer_history_item,
    validate_learning_progress, validate_learning_question, validate_module_detail,
};
pub use parse::{
    parse_answer_evaluation, parse_answer_history_item, parse_learning_progress,
    parse_learning_question, parse_module_detail,
};
