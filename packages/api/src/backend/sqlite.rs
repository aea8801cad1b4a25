use super::{Backend, CONTACT_TABLE, REGISTRATION_TABLE};
use crate::types::{ContactMessage, TrainingRegistration};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{any::AnyPoolOptions, Any, Pool};
use std::path::Path;
use tokio::sync::OnceCell;
use uuid::Uuid;

/// Local-mode backend: rows land in a SQLite file next to the app.
pub struct SqliteBackend {
    path: String,
    pool: OnceCell<Pool<Any>>,
}

impl SqliteBackend {
    /// Defer opening the file until the first insert.
    pub fn lazy(path: &str) -> Self {
        Self {
            path: path.to_string(),
            pool: OnceCell::new(),
        }
    }

    /// Open the file and apply migrations right away.
    pub async fn connect(path: &str) -> Result<Self> {
        let backend = Self::lazy(path);
        backend.pool().await?;
        Ok(backend)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn pool(&self) -> Result<&Pool<Any>> {
        self.pool.get_or_try_init(|| open(&self.path)).await
    }
}

async fn open(path: &str) -> Result<Pool<Any>> {
    // Required for sqlx::Any pools; without this, AnyPoolOptions panics at runtime.
    sqlx::any::install_default_drivers();

    if let Some(parent) = Path::new(path).parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .context("Failed to create SQLite directory")?;
    }

    let pool = AnyPoolOptions::new()
        .max_connections(1) // SQLite doesn't handle concurrent writes well
        .connect(&format!("sqlite:{path}?mode=rwc"))
        .await
        .context("Failed to connect to SQLite")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("backend.sqlite: ready at {}", path);
    Ok(pool)
}

#[async_trait]
impl Backend for SqliteBackend {
    fn kind(&self) -> &'static str {
        "sqlite"
    }

    async fn insert_contact(&self, reference: Uuid, row: &ContactMessage) -> Result<()> {
        let pool = self.pool().await?;
        sqlx::query(
            r#"
            insert into contact_messages (id, first_name, last_name, email, message, status)
            values ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reference.to_string())
        .bind(&row.first_name)
        .bind(&row.last_name)
        .bind(&row.email)
        .bind(&row.message)
        .bind(row.status.as_db())
        .execute(pool)
        .await
        .with_context(|| format!("insert into {CONTACT_TABLE} failed"))?;

        tracing::debug!("backend.sqlite: inserted contact reference={}", reference);
        Ok(())
    }

    async fn insert_registration(&self, reference: Uuid, row: &TrainingRegistration) -> Result<()> {
        let pool = self.pool().await?;
        sqlx::query(
            r#"
            insert into training_registrations (
                id, first_name, last_name, email, phone, company, position,
                experience_level, preferred_training, start_date, motivation, status,
                profession, referral_source
            )
            values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(reference.to_string())
        .bind(&row.first_name)
        .bind(&row.last_name)
        .bind(&row.email)
        .bind(&row.phone)
        .bind(&row.company)
        .bind(&row.position)
        .bind(&row.experience_level)
        .bind(&row.preferred_training)
        .bind(&row.start_date)
        .bind(&row.motivation)
        .bind(row.status.as_db())
        .bind(&row.profession)
        .bind(&row.referral_source)
        .execute(pool)
        .await
        .with_context(|| format!("insert into {REGISTRATION_TABLE} failed"))?;

        tracing::debug!("backend.sqlite: inserted registration reference={}", reference);
        Ok(())
    }
}
