//! Resilience primitives for consuming an unreliable upstream.
//!
//! Bounded history, deep null pruning, instrumented timing, a lazily
//! evicted TTL cache, a concurrency-capped batch runner, and
//! debounce/throttle wrappers. All of it assumes cooperative scheduling
//! on one runtime; instances are not meant to be shared across truly
//! parallel contexts without external synchronization.

#![warn(missing_docs)]

mod batch;
mod cache;
mod history;
mod prune;
mod rate;
mod timing;

pub use batch::{run_batched, DEFAULT_BATCH_SIZE};
pub use cache::{TtlCache, DEFAULT_MAX_AGE};
pub use history::{trim_history, DEFAULT_HISTORY_LIMIT};
pub use prune::prune_nulls;
pub use rate::{Debouncer, Throttle};
pub use timing::timed;
