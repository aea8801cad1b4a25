use e2e::test_server::TestServer;

const PAGES: [&str; 8] = [
    "/",
    "/about",
    "/services",
    "/laboratory",
    "/training",
    "/contact",
    "/register",
    "/thanks",
];

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("EXFORM"), "Should render the brand name");
    assert!(body.contains("Accueil"), "Should default to French");
}

#[tokio::test]
async fn test_every_page_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for path in PAGES {
        let response = reqwest::get(server.page(path))
            .await
            .unwrap_or_else(|e| panic!("Failed to fetch {path}: {e}"));
        assert_eq!(response.status(), 200, "{path} should return 200 OK");
    }
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.page("/does/not/exist"))
        .await
        .expect("Failed to fetch page")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Page introuvable"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.page("/api/health"))
        .await
        .expect("Failed to call health endpoint");
    assert!(response.status().is_success());
    assert!(response.text().await.unwrap_or_default().contains("OK"));
}
