use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use msam_rest_api::{create_rest_app, AppConfig, ChannelsContext, CHANNELS_SETTING};
use msam_storage::testing::{MemoryChannelTable, MemorySettingsStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    app_with(MemoryChannelTable::new(), MemorySettingsStore::new())
}

fn app_with(table: MemoryChannelTable, settings: MemorySettingsStore) -> Router {
    let context = ChannelsContext::new(Arc::new(table), Arc::new(settings));
    create_rest_app(context, AppConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_channels_initially_empty() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_set_then_get_channel() {
    let app = test_app();

    let (status, body) = send(&app, Method::PUT, "/channel/A", Some(json!(["n1", "n2"]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "saved"}));

    let (status, body) = send(&app, Method::GET, "/channel/A", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"channel": "A", "id": "n1"}, {"channel": "A", "id": "n2"}])
    );
}

#[tokio::test]
async fn test_repeated_set_lists_channel_once() {
    let app = test_app();

    send(&app, Method::PUT, "/channel/A", Some(json!(["n1"]))).await;
    send(&app, Method::PUT, "/channel/A", Some(json!(["n1"]))).await;

    let (_, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(body, json!(["A"]));
}

#[tokio::test]
async fn test_set_merges_with_existing_nodes() {
    let app = test_app();

    send(&app, Method::PUT, "/channel/A", Some(json!(["n1", "n2"]))).await;
    send(&app, Method::PUT, "/channel/A", Some(json!(["n3"]))).await;

    let (_, body) = send(&app, Method::GET, "/channel/A", None).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["n1", "n2", "n3"]);
}

#[tokio::test]
async fn test_delete_channel() {
    let app = test_app();

    send(&app, Method::PUT, "/channel/A", Some(json!(["n1", "n2"]))).await;
    send(&app, Method::PUT, "/channel/B", Some(json!(["n1"]))).await;

    let (status, body) = send(&app, Method::DELETE, "/channel/A", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "done"}));

    let (_, body) = send(&app, Method::GET, "/channel/A", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(body, json!(["B"]));
}

#[tokio::test]
async fn test_ghost_channel() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/channel/ghost", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "done"}));

    let (status, body) = send(&app, Method::GET, "/channel/ghost", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_encoded_channel_name() {
    let app = test_app();

    send(&app, Method::PUT, "/channel/My%20Channel", Some(json!(["n1"]))).await;

    let (_, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(body, json!(["My Channel"]));

    let (_, body) = send(&app, Method::GET, "/channel/My%20Channel", None).await;
    assert_eq!(body, json!([{"channel": "My Channel", "id": "n1"}]));

    let (_, body) = send(&app, Method::DELETE, "/channel/My%20Channel", None).await;
    assert_eq!(body, json!({"message": "done"}));

    let (_, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_invalid_utf8_escape_names_a_channel() {
    let app = test_app();

    let (_, body) = send(&app, Method::PUT, "/channel/Caf%E9", Some(json!(["n1"]))).await;
    assert_eq!(body, json!({"message": "saved"}));

    let (_, body) = send(&app, Method::GET, "/channel/Caf%E9", None).await;
    assert_eq!(body, json!([{"channel": "Caf\u{FFFD}", "id": "n1"}]));

    let (_, body) = send(&app, Method::DELETE, "/channel/Caf%E9", None).await;
    assert_eq!(body, json!({"message": "done"}));

    let (_, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_malformed_body_reported_in_body() {
    let app = test_app();

    let (status, body) = send(&app, Method::PUT, "/channel/A", Some(json!({"ids": ["n1"]}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["exception"].is_string());

    let (_, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_missing_table_is_tolerated() {
    let app = app_with(
        MemoryChannelTable::missing("channels"),
        MemorySettingsStore::with_setting(CHANNELS_SETTING, json!(["A"])),
    );

    let (_, body) = send(&app, Method::GET, "/channel/A", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, Method::DELETE, "/channel/A", None).await;
    assert_eq!(body, json!({"message": "done"}));

    let (status, body) = send(&app, Method::PUT, "/channel/A", Some(json!(["n1"]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"exception": "Table not found: channels"}));
}

#[tokio::test]
async fn test_corrupt_channel_list_fails_listing() {
    let app = app_with(
        MemoryChannelTable::new(),
        MemorySettingsStore::with_setting(CHANNELS_SETTING, json!("not a list")),
    );

    let (status, body) = send(&app, Method::GET, "/channels", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["exception"]
        .as_str()
        .unwrap()
        .starts_with("Serialization error"));
}

#[tokio::test]
async fn test_health_reports_storage_checks() {
    let app = app_with(MemoryChannelTable::missing("channels"), MemorySettingsStore::new());

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["channel_table"]["status"], "unhealthy");
    assert_eq!(body["checks"]["settings_store"]["status"], "healthy");
}
