use std::time::Duration;

pub const DEFAULT_SQLITE_PATH: &str = ".dev/local.db";
pub const DEFAULT_INSERT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("APP_MODE").unwrap_or_default().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in production mode")]
    Missing(&'static str),
    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where submitted forms end up.
#[derive(Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Hosted table API (PostgREST-compatible).
    Rest { url: String, api_key: String },
    /// Local SQLite file, used in local mode.
    Sqlite { path: String },
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendConfig::Rest { url, .. } => f
                .debug_struct("Rest")
                .field("url", url)
                .field("api_key", &"***")
                .finish(),
            BackendConfig::Sqlite { path } => f.debug_struct("Sqlite").field("path", path).finish(),
        }
    }
}

impl BackendConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            BackendConfig::Rest { .. } => "rest",
            BackendConfig::Sqlite { .. } => "sqlite",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub backend: BackendConfig,
    /// Upper bound on a single backend insert.
    pub insert_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(AppMode::from_env(), |key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(
        mode: AppMode,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match mode {
            AppMode::Local => BackendConfig::Sqlite {
                path: non_empty("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
            },
            AppMode::Production => BackendConfig::Rest {
                url: non_empty("BACKEND_URL")
                    .ok_or(ConfigError::Missing("BACKEND_URL"))?
                    .trim_end_matches('/')
                    .to_string(),
                api_key: non_empty("BACKEND_API_KEY").ok_or(ConfigError::Missing("BACKEND_API_KEY"))?,
            },
        };

        let insert_timeout = match non_empty("BACKEND_TIMEOUT_SECS") {
            None => DEFAULT_INSERT_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "BACKEND_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            mode,
            backend,
            insert_timeout,
        })
    }
}

/// Load `.env` if present. Missing files are not an error.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("startup: loaded {}", path.display());
    }
}
