//! Wire-level tests for the HTTP transport.
//!
//! These verify what actually goes over the wire: the Basic-Auth header
//! computed from the provider key, the `.json` suffix on every path, query
//! parameter encoding, and the status-code mapping.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use threescale_api::rest::{Create, List, Read};
use threescale_api::{
    AdminEndpoint, Client, Fields, HttpError, ProviderKey, ResourceError, ThreeScaleConfig,
};

fn client_for(server: &MockServer) -> Client {
    let config = ThreeScaleConfig::builder()
        .endpoint(AdminEndpoint::new(server.uri()).unwrap())
        .provider_key(ProviderKey::new("test-key").unwrap())
        .build()
        .unwrap();
    Client::new(&config)
}

fn attrs(value: Value) -> Fields {
    value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn test_requests_carry_basic_auth_and_json_suffix() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let expected_auth = format!("Basic {}", STANDARD.encode(":test-key"));

    Mock::given(method("GET"))
        .and(path("/admin/api/services.json"))
        .and(header("Authorization", expected_auth.as_str()))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"services": []})))
        .expect(1)
        .mount(&server)
        .await;

    let manager = client.services();
    let services = manager.list(None).await.unwrap();
    assert!(services.is_empty());
}

#[tokio::test]
async fn test_query_params_are_url_encoded() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/admin/api/services.json"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"services": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = vec![
        ("page".to_string(), "2".to_string()),
        ("per_page".to_string(), "10".to_string()),
    ];
    let manager = client.services();
    let services = manager.list(Some(params)).await.unwrap();
    assert!(services.is_empty());
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/admin/api/services/999.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let manager = client.services();
    let error = manager.read(999).await.unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_403_maps_to_forbidden() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/admin/api/services.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let error = client.services().list(None).await.unwrap_err();
    assert!(error.is_forbidden());
}

#[tokio::test]
async fn test_unexpected_status_fails_loudly() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/admin/api/services.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let error = client.services().list(None).await.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Http(HttpError::UnhandledResponse { code: 503, ref body, .. })
            if body == "upstream down"
    ));
}

#[tokio::test]
async fn test_422_body_is_decoded_not_raised() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/admin/api/services.json"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"system_name": ["has already been taken"]}})),
        )
        .mount(&server)
        .await;

    // Validation errors come back as a readable entity, not an Err.
    let manager = client.services();
    let resource = manager
        .create(attrs(json!({"name": "dup", "system_name": "dup"})))
        .await
        .unwrap();
    assert_eq!(
        resource.get("errors"),
        Some(&json!({"system_name": ["has already been taken"]}))
    );
}

#[tokio::test]
async fn test_blank_body_decodes_to_absent_entity() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/admin/api/services/7.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let manager = client.services();
    let service = manager.read(7).await.unwrap();
    assert!(service.fields().is_none());
    assert_eq!(service.get("name"), None);
}

#[tokio::test]
async fn test_raw_transport_patch_sends_a_json_body() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("PATCH"))
        .and(path("/admin/api/services/7/proxy.json"))
        .and(wiremock::matchers::body_json(
            json!({"endpoint": "https://gw.example.com"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"proxy": {"endpoint": "https://gw.example.com"}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let http = client.http_client();
    let body = http
        .patch(
            "/admin/api/services/7/proxy",
            &json!({"endpoint": "https://gw.example.com"}),
            None,
        )
        .await
        .unwrap();
    assert_eq!(body["proxy"]["endpoint"], json!("https://gw.example.com"));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/admin/api/services.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let error = client.services().list(None).await.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Http(HttpError::Decode { .. })
    ));
}
