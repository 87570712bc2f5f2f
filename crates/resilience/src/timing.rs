//! Instrumented timing for async operations.

use std::future::Future;
use std::time::Instant;
use tracing::{debug, warn};

/// Run an operation and log its elapsed wall-clock time.
///
/// Pure instrumentation: the result, success or failure, passes through
/// unchanged.
pub async fn timed<T, E, F>(label: &str, operation: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let started = Instant::now();
    match operation.await {
        Ok(value) => {
            debug!("{} completed in {}ms", label, started.elapsed().as_millis());
            Ok(value)
        }
        Err(err) => {
            warn!("{} failed after {}ms", label, started.elapsed().as_millis());
            Err(err)
        }
    }
}
