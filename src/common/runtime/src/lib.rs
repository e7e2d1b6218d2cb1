//! Async runtime utilities for hypergraphdb.
//!
//! The traversal stream runs its producer loop on a Tokio task; these helpers
//! keep the choice of runtime in one place.

use std::future::Future;

use common_error::{HgError, HgResult};
use tokio::runtime::Runtime;

/// Get or create a Tokio runtime for blocking operations.
pub fn get_runtime() -> HgResult<Runtime> {
    Runtime::new().map_err(|e| HgError::internal(format!("Failed to create runtime: {e}")))
}

/// Block on a future using a fresh runtime.
pub fn block_on<F: Future>(future: F) -> HgResult<F::Output> {
    let runtime = get_runtime()?;
    Ok(runtime.block_on(future))
}

/// Spawn a task on the current runtime.
///
/// # Panics
///
/// Panics when called outside of a Tokio runtime, like `tokio::spawn`.
pub fn spawn<F>(future: F) -> tokio::task::JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(future)
}

/// Whether the caller is running inside a Tokio runtime.
pub fn in_runtime() -> bool {
    tokio::runtime::Handle::try_current().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_on_outside_runtime() {
        assert!(!in_runtime());
        let value = block_on(async { 21 * 2 }).unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_spawn_inside_runtime() {
        assert!(in_runtime());
        let handle = spawn(async { "done" });
        assert_eq!(handle.await.unwrap(), "done");
    }
}
