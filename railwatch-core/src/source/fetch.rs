use crate::source::error::FetchError;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// Retrieves the raw status page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

const USER_AGENT: &str = concat!("railwatch/", env!("CARGO_PKG_VERSION"));

/// [`Fetcher`] over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// `timeout` bounds the whole request, body included.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    fn error(&self, url: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::timeout(url, self.timeout)
        } else {
            FetchError::transport(url, e)
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.error(url, e))?;

        tracing::debug!(url, bytes = body.len(), "fetched status page");
        Ok(body)
    }
}
