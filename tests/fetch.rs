use serde_json::json;
use snaptab::api::SnapshotClient;
use snaptab::error::ApiError;
use snaptab::snapshot::SnapshotDocument;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetches_a_snapshot_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/snapshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [{"name": "a"}],
        })))
        .mount(&server)
        .await;

    let client = SnapshotClient::new(server.uri()).unwrap();
    let value = client.get_json("/admin/snapshots").await.unwrap();

    let mut doc = SnapshotDocument::from_value(value).unwrap();
    let records = doc.take_records("instances").unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn maps_server_errors_to_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/snapshots"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = SnapshotClient::new(server.uri()).unwrap();
    let err = client.get_json("/admin/snapshots").await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 500, .. }));
}

#[tokio::test]
async fn maps_gateway_timeouts_to_timeout_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/snapshots"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let client = SnapshotClient::new(server.uri()).unwrap();
    let err = client.get_json("/admin/snapshots").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout { .. }));
}
