use crate::backend::{Backend, SqliteBackend};
use crate::config::{AppConfig, AppMode, BackendConfig};
use crate::state::AppState;
use crate::types::{ContactMessage, TrainingRegistration};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Any, Pool};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use uuid::Uuid;

// Global mutex to serialize test execution since tests share process env and state
static TEST_MUTEX: Mutex<()> = Mutex::new(());

pub struct TestContext {
    pub pool: Pool<Any>,
    pub state: Arc<AppState>,
    db_path: PathBuf,
    _guard: MutexGuard<'static, ()>,
}

impl TestContext {
    pub async fn new() -> Self {
        let guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let db_path = PathBuf::from(format!(".test-{}.db", Uuid::new_v4()));
        let path = db_path.to_string_lossy().to_string();

        let backend = SqliteBackend::connect(&path)
            .await
            .expect("Failed to create test database");
        let pool = backend.pool().await.expect("pool").clone();

        let config = AppConfig {
            mode: AppMode::Local,
            backend: BackendConfig::Sqlite { path },
            insert_timeout: Duration::from_secs(5),
        };

        let state = Arc::new(AppState {
            backend: Arc::new(backend),
            config,
        });

        Self {
            pool,
            state,
            db_path,
            _guard: guard,
        }
    }

    /// Swap the backend, keeping the SQLite pool around for assertions.
    pub fn with_backend(mut self, backend: Arc<dyn Backend>, insert_timeout: Duration) -> Self {
        let mut config = self.state.config.clone();
        config.insert_timeout = insert_timeout;
        self.state = Arc::new(AppState { backend, config });
        self
    }

    pub fn set_global(&self) {
        // For tests, set thread-local state instead of global state
        // This allows each test to have its own isolated AppState
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = Some(self.state.clone());
        });
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("select count(*) from {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("count query")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Clear thread-local state
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = None;
        });

        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Backend double that never answers, for exercising the insert deadline.
#[derive(Default)]
pub struct StalledBackend {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Backend for StalledBackend {
    fn kind(&self) -> &'static str {
        "stalled"
    }

    async fn insert_contact(&self, _reference: Uuid, _row: &ContactMessage) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        Ok(())
    }

    async fn insert_registration(&self, _reference: Uuid, _row: &TrainingRegistration) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        Ok(())
    }
}
