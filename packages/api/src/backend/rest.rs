use super::{Backend, CONTACT_TABLE, REGISTRATION_TABLE};
use crate::types::{ContactMessage, TrainingRegistration};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Hosted table API (PostgREST-compatible, e.g. a Supabase project).
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestBackend {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn post_row<T: Serialize + Sync>(&self, table: &str, reference: Uuid, row: &T) -> Result<()> {
        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .with_context(|| format!("insert into {table} failed to reach backend"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(200).collect();
            anyhow::bail!("insert into {table} rejected ({status}): {body}");
        }

        tracing::info!("backend.rest: inserted into {} reference={}", table, reference);
        Ok(())
    }
}

#[async_trait]
impl Backend for RestBackend {
    fn kind(&self) -> &'static str {
        "rest"
    }

    async fn insert_contact(&self, reference: Uuid, row: &ContactMessage) -> Result<()> {
        self.post_row(CONTACT_TABLE, reference, row).await
    }

    async fn insert_registration(&self, reference: Uuid, row: &TrainingRegistration) -> Result<()> {
        self.post_row(REGISTRATION_TABLE, reference, row).await
    }
}
