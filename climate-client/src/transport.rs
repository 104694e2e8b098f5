//! HTTP GET seam between the client and the network.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::error::Result;

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

/// Issues GET requests.
///
/// Futures are not `Send`: in the browser everything runs on the one UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &Url) -> Result<Reply>;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Reply> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(Reply { status, body })
    }
}
