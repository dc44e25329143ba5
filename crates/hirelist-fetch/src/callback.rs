//! Callback-style delivery of a fetch outcome.
//!
//! The success and failure continuations are both `FnOnce` and the task
//! matches on a single `Result`, so exactly one of them runs, exactly once.

use crate::{FetchError, Fetcher};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Spawn one fetch of `url` on `runtime`.
///
/// `on_success` receives the body text; `on_failure` receives the error. The
/// call returns immediately; neither continuation has run yet when it does.
pub fn spawn_fetch<F, S, E>(
    runtime: &Handle,
    fetcher: Arc<F>,
    url: impl Into<String>,
    on_success: S,
    on_failure: E,
) -> JoinHandle<()>
where
    F: Fetcher + 'static,
    S: FnOnce(String) + Send + 'static,
    E: FnOnce(FetchError) + Send + 'static,
{
    let url = url.into();
    runtime.spawn(async move {
        match fetcher.fetch(&url).await {
            Ok(body) => {
                tracing::info!(url = %url, bytes = body.len(), "fetch succeeded");
                on_success(body);
            }
            Err(err) => {
                tracing::error!(url = %url, error = %err, "error retrieving data");
                on_failure(err);
            }
        }
    })
}

/// [`spawn_fetch`] on the runtime of the calling task.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn fetch_with_callbacks<F, S, E>(
    fetcher: Arc<F>,
    url: impl Into<String>,
    on_success: S,
    on_failure: E,
) -> JoinHandle<()>
where
    F: Fetcher + 'static,
    S: FnOnce(String) + Send + 'static,
    E: FnOnce(FetchError) + Send + 'static,
{
    spawn_fetch(&Handle::current(), fetcher, url, on_success, on_failure)
}
