mod common;

use serde_json::json;
use shortener::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_shorten_single_url_success() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["short_url"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_deduplication() {
    let server = common::create_test_server();

    let code1 = common::shorten(&server, "https://dedup.com").await;
    let code2 = common::shorten(&server, "https://dedup.com").await;

    assert_eq!(code1, code2);
}

#[tokio::test]
async fn test_shorten_no_normalization() {
    let server = common::create_test_server();

    let code1 = common::shorten(&server, "http://a.com").await;
    let code2 = common::shorten(&server, "http://a.com/").await;

    assert_ne!(code1, code2);
}

#[tokio::test]
async fn test_shorten_different_urls_get_different_codes() {
    let server = common::create_test_server();

    let code1 = common::shorten(&server, "https://example.com/1").await;
    let code2 = common::shorten(&server, "https://example.com/2").await;

    assert_ne!(code1, code2);
}

#[tokio::test]
async fn test_shorten_accepts_any_string() {
    let server = common::create_test_server();

    let code = common::shorten(&server, "not-a-valid-url").await;
    assert_eq!(code.len(), 7);
}

#[tokio::test]
async fn test_shorten_ignores_content_type() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .text(r#"{"url": "https://example.com"}"#)
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["short_url"].is_string());
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let server = common::create_test_server();

    let response = server.post("/shorten").text("{not json").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid Request\n");
}

#[tokio::test]
async fn test_shorten_empty_body() {
    let server = common::create_test_server();

    let response = server.post("/shorten").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_wrong_field_type() {
    let server = common::create_test_server();

    let response = server.post("/shorten").json(&json!({ "url": 123 })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_get_is_code_lookup() {
    let server = common::create_test_server();

    let response = server.get("/shorten").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found\n");
}

#[tokio::test]
async fn test_shorten_get_redirects_when_code_exists() {
    let (server, repository) = common::create_test_server_with_repository();
    common::create_test_link(&repository, "shorten", "https://example.com/s").await;

    let response = server.get("/shorten").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/s");
}

#[tokio::test]
async fn test_shorten_array_body_rejected() {
    let (server, repository) = common::create_test_server_with_repository();

    let response = server.post("/shorten").text(r#"["http://x.com/"]"#).await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid Request\n");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_null_body_and_null_url() {
    let server = common::create_test_server();

    let first = server.post("/shorten").text("null").await;
    first.assert_status_ok();

    let second = server.post("/shorten").json(&json!({ "url": null })).await;
    second.assert_status_ok();

    // Both decode to the empty URL, so they share a code.
    assert_eq!(
        first.json::<serde_json::Value>()["short_url"],
        second.json::<serde_json::Value>()["short_url"]
    );
}

#[tokio::test]
async fn test_shorten_duplicate_key_last_wins() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .text(r#"{"url":"http://a.com/","url":"http://b.com/"}"#)
        .await;
    response.assert_status_ok();

    let code = response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();
    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.header("location"), "http://b.com/");
}

#[tokio::test]
async fn test_shorten_uppercase_key() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .text(r#"{"URL": "http://www.example.com/"}"#)
        .await;
    response.assert_status_ok();

    let listed = server.get("/metrics/list").await.json::<serde_json::Value>();
    let listed = listed.as_object().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.values().next().unwrap(), "http://www.example.com/");

    assert_eq!(server.get("/metrics").await.text(), "example: 1, \n");
}

#[tokio::test]
async fn test_shorten_response_ends_with_newline() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");

    let body = response.text();
    assert!(body.starts_with(r#"{"short_url":""#));
    assert!(body.ends_with("\"}\n"));
}
