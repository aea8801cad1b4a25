use api::test_utils::{StalledBackend, TestContext};
use api::types::ContactDraft;
use sqlx::Row;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

fn draft() -> ContactDraft {
    ContactDraft {
        first_name: " Yao ".to_string(),
        last_name: "Kouassi".to_string(),
        email: "yao.kouassi@example.com".to_string(),
        message: "Bonjour, je voudrais un devis pour une analyse d'eau.".to_string(),
    }
}

#[tokio::test]
async fn test_contact_submission_inserts_new_row() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let receipt = api::submit_contact(draft())
        .await
        .expect("Submission should succeed");

    let row = sqlx::query("SELECT id, first_name, email, status FROM contact_messages")
        .fetch_one(&ctx.pool)
        .await
        .expect("Row should exist");

    let id: String = row.get("id");
    let first_name: String = row.get("first_name");
    let status: String = row.get("status");
    assert_eq!(id, receipt.reference.to_string());
    assert_eq!(first_name, "Yao", "Names are stored trimmed");
    assert_eq!(status, "new");
}

#[tokio::test]
async fn test_contact_rejects_short_message_without_insert() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let mut invalid = draft();
    invalid.message = "Salut".to_string();

    let error = api::submit_contact(invalid)
        .await
        .expect_err("Short message should be rejected")
        .to_string();

    assert_eq!(api::rejection_key(&error), Some("validation.message"));
    assert_eq!(ctx.count("contact_messages").await, 0);
}

#[tokio::test]
async fn test_contact_gives_up_on_hung_backend() {
    let stalled = Arc::new(StalledBackend::default());
    let ctx = TestContext::new()
        .await
        .with_backend(stalled.clone(), Duration::from_millis(50));
    ctx.set_global();

    let error = api::submit_contact(draft())
        .await
        .expect_err("Hung backend should time out")
        .to_string();

    assert!(error.contains("did not answer"), "unexpected error: {error}");
    assert_eq!(api::rejection_key(&error), None);
    assert_eq!(stalled.calls.load(Ordering::SeqCst), 1);
}
