//! Fake hiring-list endpoint for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /hiring.json`: the configured body with the configured status,
//!   optionally after a delay
//!
//! Any other path gets axum's default 404.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_endpoint::FakeEndpoint;
//!
//! let endpoint = FakeEndpoint::start(common::BASIC_SORT).await.unwrap();
//! let url = endpoint.url();
//! # });
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What `/hiring.json` answers with.
#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

struct EndpointState {
    reply: Mutex<Reply>,
    hits: AtomicUsize,
}

/// Handle to the running fake endpoint.
pub struct FakeEndpoint {
    addr: SocketAddr,
    state: Arc<EndpointState>,
}

impl FakeEndpoint {
    /// Start serving `body` with `200 OK`. Returns once the server is
    /// listening.
    pub async fn start(body: &str) -> std::io::Result<Self> {
        Self::start_with(StatusCode::OK, body, None).await
    }

    /// Start serving `body` with an arbitrary status and an optional delay
    /// before the response is written.
    pub async fn start_with(
        status: StatusCode,
        body: &str,
        delay: Option<Duration>,
    ) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(EndpointState {
            reply: Mutex::new(Reply {
                status,
                body: body.to_string(),
                delay,
            }),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/hiring.json", get(serve_list))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Full URL of the list resource.
    pub fn url(&self) -> String {
        format!("{}/hiring.json", self.base_url())
    }

    /// Replace the body served from now on.
    pub async fn set_body(&self, body: &str) {
        self.state.reply.lock().await.body = body.to_string();
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

/// A URL on 127.0.0.1 that refuses connections: the port was bound and then
/// released, so nothing is listening on it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/hiring.json")
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn serve_list(State(state): State<Arc<EndpointState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let reply = state.reply.lock().await.clone();
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (
        reply.status,
        [("content-type", "application/json")],
        reply.body,
    )
}
