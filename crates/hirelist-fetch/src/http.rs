//! HTTP fetcher built on hyper-util's pooled client.
//!
//! One GET per call, no request body, no retries. Redirects are not followed:
//! anything outside 2xx is reported as [`FetchError::Status`].

use crate::{error::FetchError, Fetcher};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{header, Request, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use std::time::Duration;

const USER_AGENT: &str = concat!("hirelist/", env!("CARGO_PKG_VERSION"));

type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Fetcher for `http://` and `https://` URLs.
///
/// Cloning is cheap and shares the connection pool. The client holds no
/// per-request state, so separate fetches never observe each other.
#[derive(Clone)]
pub struct HttpFetcher {
    client: HttpsClient,
    timeout: Option<Duration>,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// A fetcher with no timeout.
    pub fn new() -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
            timeout: None,
        }
    }

    /// Bound the whole request (connect, headers and body) by `timeout`.
    /// `None` leaves it unbounded.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let uri = parse_url(url)?;
        let req = Request::get(uri)
            .header(header::USER_AGENT, USER_AGENT)
            .body(Empty::<Bytes>::new())?;

        tracing::debug!(url, "GET");
        let resp = self
            .client
            .request(req)
            .await
            .map_err(|e| FetchError::network(url, &e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = resp.into_body().collect().await?.to_bytes();
        tracing::debug!(url, %status, bytes = bytes.len(), "response received");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match self.timeout {
            Some(after) => tokio::time::timeout(after, self.get(url))
                .await
                .map_err(|_| FetchError::Timeout {
                    url: url.to_string(),
                    after,
                })?,
            None => self.get(url).await,
        }
    }
}

/// Accept only absolute `http`/`https` URLs with a host.
fn parse_url(url: &str) -> Result<Uri, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let uri: Uri = url.parse().map_err(|e: hyper::http::uri::InvalidUri| invalid(e.to_string()))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        Some(other) => return Err(invalid(format!("unsupported scheme '{other}'"))),
        None => return Err(invalid("missing scheme".to_string())),
    }
    if uri.host().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(parse_url("http://127.0.0.1:8080/hiring.json").is_ok());
        assert!(parse_url("https://fetch-hiring.s3.amazonaws.com/hiring.json").is_ok());
    }

    #[test]
    fn rejects_relative_and_foreign_urls() {
        for url in ["hiring.json", "/hiring.json", "ftp://example.com/x", "not a url"] {
            assert!(
                matches!(parse_url(url), Err(FetchError::InvalidUrl { .. })),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn timeout_is_configurable() {
        let f = HttpFetcher::new().with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(f.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(HttpFetcher::new().timeout(), None);
    }
}
