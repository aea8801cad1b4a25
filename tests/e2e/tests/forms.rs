use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

const NEXT: &str = ".wizard_next";
const HYDRATION: Duration = Duration::from_secs(3);

#[tokio::test]
async fn test_contact_form_renders() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page("/contact"))
        .expect("Failed to navigate");

    for selector in [
        "input[name='first_name']",
        "input[name='last_name']",
        "input[name='email']",
        "textarea[name='message']",
        "button[type='submit']",
    ] {
        assert!(page.find_element(selector).is_ok(), "{selector} should exist");
    }
    assert!(page.find_element(".location_map_frame").is_ok(), "Map should be embedded");
    assert_eq!(
        page.attribute(".location_map_frame", "loading").expect("map frame").as_deref(),
        Some("lazy")
    );
    let src = page
        .attribute(".location_map_frame", "src")
        .expect("map frame")
        .unwrap_or_default();
    assert!(src.starts_with("https://www.openstreetmap.org/export/embed.html"));
}

#[tokio::test]
async fn test_register_wizard_starts_on_first_step() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page("/register?training=vibration"))
        .expect("Failed to navigate");

    let progress = page
        .find_element(".wizard_progress")
        .expect("Progress indicator should exist");
    assert!(progress.contains('1') && progress.contains('3'));

    assert!(page.find_element("input[type='email']").is_ok());
    assert!(page.find_element("input[type='tel']").is_ok());
}

#[tokio::test]
async fn test_register_wizard_advances_once_step_one_is_filled() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page("/register"))
        .expect("Failed to navigate");
    // Inputs typed before the client takes over are not seen by the wizard.
    tokio::time::sleep(HYDRATION).await;

    assert!(page.is_disabled(NEXT).expect("Next button"), "Next starts disabled");

    for (selector, value) in [
        ("input[name='first_name']", "Ama"),
        ("input[name='last_name']", "Koffi"),
        ("input[name='email']", "ama@exform.ci"),
    ] {
        page.type_text(selector, value).expect("Failed to type");
        assert!(
            page.is_disabled(NEXT).expect("Next button"),
            "Next stays disabled until every step-one field is filled"
        );
    }

    page.type_text("input[name='phone']", "0700000000")
        .expect("Failed to type phone");
    page.wait_for(Duration::from_secs(5), |p| {
        matches!(p.is_disabled(NEXT), Ok(false))
    })
    .expect("Next should enable once step one is complete");

    page.click(NEXT).expect("Failed to click next");
    assert!(
        page.find_element("input[name='company']").is_ok(),
        "Step two should ask for the company"
    );
}

#[tokio::test]
async fn test_register_back_button_returns_to_catalog() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page("/register"))
        .expect("Failed to navigate");
    tokio::time::sleep(HYDRATION).await;

    page.click(".wizard_back").expect("Failed to click back");
    page.wait_for(Duration::from_secs(5), |p| p.url().ends_with("/training"))
        .expect("Leaving step one should land on the training catalog");
}
