//! hirelist-fetch: retrieval of the raw list body.
//!
//! A [`Fetcher`] performs exactly one GET per call and resolves to the body
//! text or a [`FetchError`]. [`spawn_fetch`] wraps that future in the
//! callback form: one of two continuations runs, exactly once, after the
//! outcome is known.
//!
//! No global client or request queue exists; callers construct a fetcher and
//! pass it where it is needed.

pub mod callback;
pub mod error;
pub mod http;
pub mod state;

use std::future::Future;

pub use callback::{fetch_with_callbacks, spawn_fetch};
pub use error::FetchError;
pub use http::HttpFetcher;
pub use state::{FetchState, TransitionError};

/// Trait implemented by anything that can retrieve the list body.
///
/// Implementations keep no state between calls; two fetches in flight at the
/// same time are independent and may finish in either order.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
