use crate::types::{ContactMessage, TrainingRegistration};
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use uuid::Uuid;

pub mod rest;
pub mod sqlite;

pub const CONTACT_TABLE: &str = "contact_messages";
pub const REGISTRATION_TABLE: &str = "training_registrations";

/// Destination of validated form rows.
#[async_trait]
pub trait Backend: Send + Sync {
    fn kind(&self) -> &'static str;

    async fn insert_contact(&self, reference: Uuid, row: &ContactMessage) -> Result<()>;

    async fn insert_registration(&self, reference: Uuid, row: &TrainingRegistration) -> Result<()>;
}

// Re-export implementations
pub use rest::RestBackend;
pub use sqlite::SqliteBackend;

/// Run a backend call, failing once `limit` elapses.
pub async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => anyhow::bail!("backend did not answer within {}ms", limit.as_millis()),
    }
}
