//! Concurrency-capped batch execution.

use std::future::Future;
use futures::future::join_all;
use tracing::debug;

/// Default chunk size.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Run an operation over every item, at most `batch_size` at a time.
///
/// Items are split into consecutive chunks; each chunk runs concurrently
/// and is fully awaited before the next one starts. Results come back in
/// input order regardless of completion order inside a chunk. The first
/// failure aborts the whole batch after its chunk settles; callers
/// needing partial tolerance must wrap individual operations.
pub async fn run_batched<T, R, E, F, Fut>(
    items: Vec<T>,
    operation: F,
    batch_size: usize,
) -> Result<Vec<R>, E>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let chunk_size = batch_size.max(1);
    let total = items.len();
    let mut results = Vec::with_capacity(total);
    let mut remaining = items.into_iter();

    loop {
        let chunk: Vec<T> = remaining.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let settled = join_all(chunk.into_iter().map(&operation)).await;
        for outcome in settled {
            results.push(outcome?);
        }
        debug!("batch progress: {}/{}", results.len(), total);
    }

    Ok(results)
}
