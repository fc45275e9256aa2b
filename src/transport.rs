//! HTTP transport used by the [Client](crate::Client).

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::ProtocolError;

/// Sends a request body to the API and returns the response body.
///
/// Implementations must be safe for concurrent use until released.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url` and reads the whole response body as text.
    ///
    /// Fails with [ProtocolError::Cancelled] once `cancel` fires.
    async fn post(
        &self,
        url: &Url,
        content_type: &'static str,
        body: String,
        cancel: &CancellationToken,
    ) -> Result<String, ProtocolError>;

    /// Releases the underlying resources. Called at most once by the client.
    fn release(&self);
}

/// Shares one transport between several clients.
///
/// Releasing only reaches the inner transport from the last reference, so
/// disposing one client leaves the others working.
#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(
        &self,
        url: &Url,
        content_type: &'static str,
        body: String,
        cancel: &CancellationToken,
    ) -> Result<String, ProtocolError> {
        (**self).post(url, content_type, body, cancel).await
    }

    fn release(&self) {
        if Arc::strong_count(self) == 1 {
            (**self).release();
        }
    }
}

/// [Transport] backed by a [reqwest::Client].
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Mutex<Option<reqwest::Client>>,
}

impl ReqwestTransport {
    /// Creates a transport with a default [reqwest::Client].
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Uses a preconfigured client, e.g. one with timeouts or a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Mutex::new(Some(client)),
        }
    }

    fn client(&self) -> Option<reqwest::Client> {
        self.client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &Url,
        content_type: &'static str,
        body: String,
        cancel: &CancellationToken,
    ) -> Result<String, ProtocolError> {
        let client = self.client().ok_or(ProtocolError::Released)?;

        let request = async {
            let resp = client
                .post(url.clone())
                .header(CONTENT_TYPE, content_type)
                .body(body)
                .send()
                .await?;
            log::debug!("HTTP status: {}", resp.status());
            resp.text().await
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ProtocolError::Cancelled),
            text = request => Ok(text?),
        }
    }

    fn release(&self) {
        self.client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
