#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prostory_api::models::GalleryImage;
use prostory_api::{ApiClient, Collection, Error, Resource, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri());
    let client = ApiClient::new(&base, &TransportConfig::default()).unwrap();
    (server, client)
}

// ── Success paths ───────────────────────────────────────────────────

#[tokio::test]
async fn test_get_json_bare_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/lodges/types/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Коттеджи" },
            { "id": 2, "name": "Глэмпинг" }
        ])))
        .mount(&server)
        .await;

    let raw = client.get_json(&Resource::LodgeTypes.path()).await.unwrap();
    let collection = Collection::from(raw);

    assert!(matches!(collection, Collection::Bare(_)));
    assert_eq!(collection.len(), 2);
}

#[tokio::test]
async fn test_get_json_paginated_with_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/gallery/"))
        .and(query_param("position", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                { "id": 10, "position": "main", "column": "left" },
                { "id": 11, "position": "main", "column": "right" }
            ]
        })))
        .mount(&server)
        .await;

    let query = Resource::Gallery.query().param("position", Some("main"));
    let raw = client
        .get_json(&Resource::Gallery.collection_path(&query))
        .await
        .unwrap();
    let images: Vec<GalleryImage> = Collection::from(raw).decode().unwrap();

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].column.as_deref(), Some("left"));
    assert_eq!(images[1].position.as_deref(), Some("main"));
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/statistics/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let raw = client.get_json("/statistics/").await.unwrap();
    assert_eq!(raw, serde_json::Value::Null);
}

#[tokio::test]
async fn test_get_text_sitemap() {
    let (server, client) = setup().await;

    let xml = r#"<?xml version="1.0" encoding="UTF-8"?><urlset/>"#;
    Mock::given(method("GET"))
        .and(path("/api/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(&server)
        .await;

    let body = client.get_text(&Resource::Sitemap.path()).await.unwrap();
    assert_eq!(body, xml);
}

// ── Error paths ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_carries_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/lodges/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Не найдено." })))
        .mount(&server)
        .await;

    let err = client.get_json("/lodges/999/").await.unwrap_err();
    assert!(err.is_not_found());

    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message.as_deref(), Some("Не найдено."));
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
        .mount(&server)
        .await;

    let result = client.get_json("/news/").await;

    assert!(
        matches!(
            result,
            Err(Error::Http {
                status: 500,
                message: None
            })
        ),
        "expected Http 500, got: {result:?}"
    );
}

#[tokio::test]
async fn test_non_json_success_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/hero/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.get_json("/hero/").await;

    match result {
        Err(Error::Deserialization { body, .. }) => {
            assert!(body.contains("maintenance"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let base = format!("http://127.0.0.1:{port}/api");

    let client = ApiClient::new(&base, &TransportConfig::default()).unwrap();
    let err = client.get_json("/lodges/").await.unwrap_err();

    assert!(err.is_network(), "expected network error, got: {err:?}");
    assert_eq!(err.status_code(), None);
}
