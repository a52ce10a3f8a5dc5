// src/services/source.rs

//! Record source service.
//!
//! Fetches raw user and post records from the configured endpoints.
//! The rest of the pipeline only sees the `RecordSource` trait, so
//! analysis can be exercised without any network.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Abstract source of raw user and post records.
///
/// Each fetch either yields a collection of raw JSON records or fails;
/// partial results are never returned.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the raw user collection.
    async fn fetch_users(&self) -> Result<Vec<Value>>;

    /// Fetch the raw post collection.
    async fn fetch_posts(&self) -> Result<Vec<Value>>;
}

/// Record source backed by two HTTP endpoints.
pub struct HttpRecordSource {
    config: Arc<Config>,
    client: Client,
}

impl HttpRecordSource {
    /// Create a new HTTP record source with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetch a URL and parse the response as a JSON array of records.
    ///
    /// Any transport, status, or body-shape failure maps to a `Fetch`
    /// error naming the resource, so callers see which endpoint broke.
    async fn fetch_records(&self, url: &str, resource: &str) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| AppError::fetch(resource))?;

        let response = response
            .error_for_status()
            .map_err(|_| AppError::fetch(resource))?;

        let body: Value = response
            .json()
            .await
            .map_err(|_| AppError::fetch(resource))?;

        match body {
            Value::Array(records) => Ok(records),
            _ => Err(AppError::fetch(resource)),
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_users(&self) -> Result<Vec<Value>> {
        self.fetch_records(&self.config.api.users_url, "users").await
    }

    async fn fetch_posts(&self) -> Result<Vec<Value>> {
        self.fetch_records(&self.config.api.posts_url, "posts").await
    }
}
