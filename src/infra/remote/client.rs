use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use crate::calculator::ResultRecord;
use crate::fetch::{BasicClient, HttpClient, submit_form};
use crate::form::FormPayload;
use crate::services::ResultApi;

/// Talks to a result endpoint such as the one served by `srms serve`.
pub struct RemoteResultClient<C = BasicClient> {
    client: C,
    endpoint: Url,
}

impl RemoteResultClient<BasicClient> {
    /// Creates a client for `endpoint` that gives up after `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = BasicClient::with_timeout(timeout)?;
        Self::with_client(client, endpoint)
    }
}

impl<C: HttpClient> RemoteResultClient<C> {
    pub fn with_client(client: C, endpoint: &str) -> Result<Self> {
        let endpoint: Url = endpoint
            .parse()
            .with_context(|| format!("invalid endpoint URL '{endpoint}'"))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl<C: HttpClient> ResultApi for RemoteResultClient<C> {
    async fn calculate(&self, form: &FormPayload) -> Result<ResultRecord> {
        let encoded = form.encode()?;

        let response = submit_form(&self.client, &self.endpoint, &encoded)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to reach result endpoint: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Server error: {} {}", status, body));
        }

        let record: ResultRecord = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse result: {}", e))?;

        debug!(total = record.total, grade = %record.grade, "Endpoint result decoded");
        Ok(record)
    }
}
