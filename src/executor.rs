use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::TransportError;

/// The HTTP boundary consumed by every service: send one request, hand back
/// the raw body or a transport error.
///
/// Implementations must be reentrant; the client shares one executor across
/// unsynchronized concurrent calls. Cancelling `cancel` must abort the
/// in-flight request and return [`TransportError::Cancelled`].
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        base_url: &str,
        query: &str,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, TransportError>;
}

/// Default executor backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    http: reqwest::Client,
}

impl ReqwestExecutor {
    /// Build the underlying HTTP client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        debug!(%url, "sending request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate_body(&bytes),
            });
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Executor for ReqwestExecutor {
    async fn execute(
        &self,
        method: Method,
        base_url: &str,
        query: &str,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, TransportError> {
        let url = if query.is_empty() {
            base_url.to_string()
        } else {
            format!("{base_url}?{query}")
        };

        tokio::select! {
            () = cancel.cancelled() => Err(TransportError::Cancelled),
            result = self.send(method, &url, body) => result,
        }
    }
}

fn truncate_body(bytes: &[u8]) -> String {
    const MAX: usize = 200;
    let text = String::from_utf8_lossy(bytes);
    if text.chars().count() > MAX {
        let cut: String = text.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        text.into_owned()
    }
}
