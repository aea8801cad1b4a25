use crate::types::{RegistrationDraft, SubmissionReceipt};
use dioxus::prelude::*;

#[dioxus::prelude::post("/api/registrations")]
pub async fn submit_registration(
    draft: RegistrationDraft,
) -> Result<SubmissionReceipt, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = draft;
        Err(ServerFnError::new("submit_registration is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use time::OffsetDateTime;
        use uuid::Uuid;

        let row = crate::validation::validate_registration(&draft).map_err(|e| {
            tracing::info!("registrations.submit_registration: rejected field={}", e.key());
            crate::rejected(e)
        })?;
        let state = crate::state::AppState::try_global()
            .ok_or_else(|| ServerFnError::new("server state is not initialized"))?;

        let reference = Uuid::new_v4();
        tracing::info!(
            "registrations.submit_registration: reference={} training={}",
            reference,
            row.preferred_training
        );
        crate::backend::with_deadline(
            state.config.insert_timeout,
            state.backend.insert_registration(reference, &row),
        )
        .await
        .map_err(|e| {
            tracing::warn!(
                "registrations.submit_registration: reference={} error={:#}",
                reference,
                e
            );
            ServerFnError::new(format!("registration submission failed: {e}"))
        })?;

        Ok(SubmissionReceipt {
            reference,
            received_at: OffsetDateTime::now_utc(),
        })
    }
}
