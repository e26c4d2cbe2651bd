pub mod digest;
pub mod imaging;

use anyhow::anyhow;

/// Run CPU-bound work off the async worker threads
pub async fn run_blocking<T, F>(work: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| anyhow!("Worker task failed: {}", e))?
}
