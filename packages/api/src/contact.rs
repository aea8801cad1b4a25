use crate::types::{ContactDraft, SubmissionReceipt};
use dioxus::prelude::*;

#[dioxus::prelude::post("/api/contact")]
pub async fn submit_contact(draft: ContactDraft) -> Result<SubmissionReceipt, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = draft;
        Err(ServerFnError::new("submit_contact is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use time::OffsetDateTime;
        use uuid::Uuid;

        let row = crate::validation::validate_contact(&draft).map_err(|e| {
            tracing::info!("contact.submit_contact: rejected field={}", e.key());
            crate::rejected(e)
        })?;
        let state = crate::state::AppState::try_global()
            .ok_or_else(|| ServerFnError::new("server state is not initialized"))?;

        let reference = Uuid::new_v4();
        tracing::info!(
            "contact.submit_contact: reference={} message_len={}",
            reference,
            row.message.len()
        );
        crate::backend::with_deadline(
            state.config.insert_timeout,
            state.backend.insert_contact(reference, &row),
        )
        .await
        .map_err(|e| {
            tracing::warn!("contact.submit_contact: reference={} error={:#}", reference, e);
            ServerFnError::new(format!("contact submission failed: {e}"))
        })?;

        Ok(SubmissionReceipt {
            reference,
            received_at: OffsetDateTime::now_utc(),
        })
    }
}
