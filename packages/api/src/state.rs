use crate::backend::{Backend, RestBackend, SqliteBackend};
use crate::config::{AppConfig, AppMode, BackendConfig};
use anyhow::Result;
use std::sync::{Arc, OnceLock};

/// Global application state shared by the server functions
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.backend.kind())
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Create AppState from configuration
    ///
    /// The SQLite file is opened (and migrated) on the first submission so that
    /// startup does not depend on the runtime used here.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let backend: Arc<dyn Backend> = match &config.backend {
            BackendConfig::Rest { url, api_key } => {
                tracing::info!("   Backend: hosted tables at {}", url);
                Arc::new(RestBackend::new(url, api_key, config.insert_timeout)?)
            }
            BackendConfig::Sqlite { path } => {
                tracing::info!("   Backend: SQLite ({})", path);
                Arc::new(SqliteBackend::lazy(path))
            }
        };
        tracing::info!("   Insert timeout: {}s", config.insert_timeout.as_secs());

        Ok(Self { backend, config })
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance, if initialized.
    pub fn try_global() -> Option<Arc<Self>> {
        // In tests, check thread-local state first
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Some(test_state);
        }
        STATE.get().cloned()
    }

    /// Get the global AppState instance
    ///
    /// Panics if called before set_global.
    pub fn global() -> Arc<Self> {
        Self::try_global().expect("AppState::global called before set_global")
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INSERT_TIMEOUT;

    #[tokio::test]
    async fn local_config_builds_sqlite_backend_without_touching_disk() {
        let config = AppConfig {
            mode: AppMode::Local,
            backend: BackendConfig::Sqlite {
                path: ".dev/never-opened.db".into(),
            },
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
        };
        let state = AppState::from_config(config).await.unwrap();
        assert_eq!(state.backend.kind(), "sqlite");
        assert!(!std::path::Path::new(".dev/never-opened.db").exists());
    }

    #[tokio::test]
    async fn production_config_builds_rest_backend() {
        let config = AppConfig {
            mode: AppMode::Production,
            backend: BackendConfig::Rest {
                url: "https://db.exform.ci".into(),
                api_key: "anon".into(),
            },
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
        };
        let state = AppState::from_config(config).await.unwrap();
        assert_eq!(state.backend.kind(), "rest");
    }
}
