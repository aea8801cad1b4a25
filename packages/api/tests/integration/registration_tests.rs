use api::test_utils::TestContext;
use api::types::RegistrationDraft;
use sqlx::Row;

fn draft() -> RegistrationDraft {
    RegistrationDraft {
        first_name: "Ama".to_string(),
        last_name: "Koffi".to_string(),
        email: "ama.koffi@example.com".to_string(),
        phone: "+225 07 00 00 00 00".to_string(),
        company: "Société Ivoirienne de Raffinage".to_string(),
        position: "Technicienne de maintenance".to_string(),
        experience_level: "6-10".to_string(),
        preferred_training: "vibration".to_string(),
        start_date: "2026-11-02".to_string(),
        motivation: String::new(),
    }
}

#[tokio::test]
async fn test_registration_writes_new_and_legacy_columns() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    api::submit_registration(draft())
        .await
        .expect("Registration should succeed");

    let row = sqlx::query(
        "SELECT position, profession, experience_level, referral_source, motivation, status FROM training_registrations",
    )
    .fetch_one(&ctx.pool)
    .await
    .expect("Row should exist");

    let position: String = row.get("position");
    let profession: String = row.get("profession");
    let experience: Option<String> = row.get("experience_level");
    let referral: Option<String> = row.get("referral_source");
    let motivation: Option<String> = row.get("motivation");
    let status: String = row.get("status");

    assert_eq!(position, "Technicienne de maintenance");
    assert_eq!(profession, position);
    assert_eq!(experience.as_deref(), Some("6-10"));
    assert_eq!(referral, experience);
    assert_eq!(motivation, None);
    assert_eq!(status, "new");
}

#[tokio::test]
async fn test_registration_rejects_bad_email() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let mut invalid = draft();
    invalid.email = "not-an-email".to_string();

    let error = api::submit_registration(invalid)
        .await
        .expect_err("Bad email should be rejected")
        .to_string();

    assert_eq!(api::rejection_key(&error), Some("validation.email"));
    assert_eq!(ctx.count("training_registrations").await, 0);
}

#[tokio::test]
async fn test_each_submission_is_a_separate_row() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let first = api::submit_registration(draft()).await.expect("first");
    let second = api::submit_registration(draft()).await.expect("second");

    assert_ne!(first.reference, second.reference);
    assert_eq!(ctx.count("training_registrations").await, 2);
}
