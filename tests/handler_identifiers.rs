mod common;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_uuid_default_v4() {
    let server = common::create_test_server();

    let response = server.get("/uuid").await;

    response.assert_status_ok();
    let uuid = Uuid::parse_str(&response.text()).unwrap();
    assert_eq!(uuid.get_version_num(), 4);
}

#[tokio::test]
async fn test_uuid_versions() {
    let server = common::create_test_server();

    for (path, version) in [("/uuid/v4", 4), ("/uuid/v6", 6), ("/uuid/v7", 7)] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let uuid = Uuid::parse_str(&response.text()).unwrap();
        assert_eq!(uuid.get_version_num(), version, "{path}");
    }
}

#[tokio::test]
async fn test_uuid_unsupported_version() {
    let server = common::create_test_server();

    let response = server.get("/uuid/v9").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["details"]["supported"],
        serde_json::json!(["v4", "v6", "v7"])
    );
}

#[tokio::test]
async fn test_uuid_v5_without_value() {
    let server = common::create_test_server();

    let response = server.get("/uuid/v5").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/uuid/v5/{value}")
    );
}

#[tokio::test]
async fn test_uuid_v5() {
    let server = common::create_test_server();

    let default_ns = server.get("/uuid/v5/example.com").await.text();
    let dns = server.get("/uuid/v5/example.com/dns").await.text();
    let url = server.get("/uuid/v5/example.com/url").await.text();

    assert_eq!(default_ns, "cfbff0d1-9375-5685-968c-48ce8b15ae17");
    assert_eq!(default_ns, dns);
    assert_ne!(dns, url);
}

#[tokio::test]
async fn test_uuid_v5_unknown_namespace() {
    let server = common::create_test_server();

    let response = server.get("/uuid/v5/example.com/planet").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nanoid() {
    let server = common::create_test_server();

    let id = server.get("/nanoid").await.text();

    assert_eq!(id.len(), 21);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[tokio::test]
async fn test_typeid() {
    let server = common::create_test_server();

    let bare = server.get("/typeid").await.text();
    assert_eq!(bare.len(), 26);

    let prefixed = server.get("/typeid/user").await.text();
    let (prefix, suffix) = prefixed.split_once('_').unwrap();
    assert_eq!(prefix, "user");
    assert_eq!(suffix.len(), 26);
}

#[tokio::test]
async fn test_typeid_invalid_prefix() {
    let server = common::create_test_server();

    let response = server.get("/typeid/User1").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
