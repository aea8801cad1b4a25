//! This crate contains the shared form types, schema validation and the
//! fullstack server functions that forward submissions to the backend.
use dioxus::prelude::*;

pub mod config;
pub mod types;
pub mod validation;

#[cfg(feature = "server")]
pub mod backend;

#[cfg(feature = "server")]
pub mod state;

mod contact;
mod registrations;


#[cfg(feature = "server")]
pub mod test_utils;

/// Marker prefixed to errors raised when the server-side schema check refuses a draft.
pub const REJECTED_PREFIX: &str = "rejected: ";

#[cfg(feature = "server")]
pub(crate) fn rejected(err: validation::ValidationError) -> ServerFnError {
    ServerFnError::new(format!("{REJECTED_PREFIX}{}", err.key()))
}

/// Extract the validation key from a server rejection message, if it is one.
pub fn rejection_key(message: &str) -> Option<&str> {
    let start = message.find(REJECTED_PREFIX)? + REJECTED_PREFIX.len();
    message[start..]
        .split_whitespace()
        .next()
        .filter(|key| key.starts_with("validation."))
}

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Detailed health check
#[get("/api/health/detailed")]
pub async fn detailed_health_check() -> Result<serde_json::Value, ServerFnError> {
    use serde_json::json;

    #[cfg(feature = "server")]
    tracing::debug!("detailed_health_check");

    #[cfg(feature = "server")]
    let backend = state::AppState::try_global()
        .map(|s| s.backend.kind())
        .unwrap_or("uninitialized");
    #[cfg(not(feature = "server"))]
    let backend = "unknown";

    Ok(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "backend": backend,
        }
    }))
}

pub use contact::submit_contact;
pub use registrations::submit_registration;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_key_reads_marker_anywhere_in_message() {
        assert_eq!(
            rejection_key("error running server function: rejected: validation.email"),
            Some("validation.email")
        );
        assert_eq!(rejection_key("rejected: validation.phone"), Some("validation.phone"));
        assert_eq!(rejection_key("contact submission failed: timeout"), None);
        assert_eq!(rejection_key("rejected: something else"), None);
    }
}
