#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use shortener::domain::entities::Link;
use shortener::domain::repositories::LinkRepository;
use shortener::infrastructure::persistence::InMemoryLinkRepository;
use shortener::routes::app_router;
use shortener::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repository.clone());
    (state, repository)
}

pub fn create_test_server() -> TestServer {
    let (state, _repository) = create_test_state();
    TestServer::new(app_router(state)).unwrap()
}

pub fn create_test_server_with_repository() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repository) = create_test_state();
    (TestServer::new(app_router(state)).unwrap(), repository)
}

pub async fn create_test_link(repository: &InMemoryLinkRepository, code: &str, url: &str) {
    repository.insert(Link::new(code, url)).await.unwrap();
}

/// Shortens `url` through the API and returns the short code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.post("/shorten").json(&json!({ "url": url })).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    body["short_url"].as_str().unwrap().to_string()
}
