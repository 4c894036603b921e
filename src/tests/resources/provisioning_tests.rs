use super::create_test_client;
use crate::{Archive, GridError, Hostname};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

#[tokio::test]
async fn test_prepare_sends_hostname() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/prepare"))
        .and(body_string_contains("name=\"hostname\""))
        .and(body_string_contains("landing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "fqdn": "landing.grid.lab",
            "ip": "192.168.56.20"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let prepared = client
        .prepare(&Hostname::parse("landing").unwrap())
        .await
        .unwrap();
    assert_eq!(prepared.ip, "192.168.56.20");
    assert_eq!(prepared.fqdn.as_deref(), Some("landing.grid.lab"));
}

#[tokio::test]
async fn test_prepare_error_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/prepare"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "no free address"})),
        )
        .mount(&mock_server)
        .await;

    let error = client
        .prepare(&Hostname::parse("landing").unwrap())
        .await
        .unwrap_err();
    assert_eq!(error.reason(), "no free address");
}

#[tokio::test]
async fn test_provision_returns_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/provision"))
        .and(body_string_contains("docs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "job-7"})),
        )
        .mount(&mock_server)
        .await;

    let provisioned = client
        .provision(&Hostname::parse("docs").unwrap())
        .await
        .unwrap();
    assert_eq!(provisioned.id, "job-7");
}

#[tokio::test]
async fn test_publish_uploads_archive() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("site.zip");
    std::fs::write(&bundle, b"PK\x03\x04 site contents").unwrap();

    Mock::given(method("POST"))
        .and(path("/publish"))
        .and(body_string_contains("name=\"hostname\""))
        .and(body_string_contains("filename=\"site.zip\""))
        .and(body_string_contains("application/zip"))
        .and(body_string_contains("site contents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "job-8",
            "host": "landing",
            "ip": "192.168.56.20",
            "url": "http://landing.grid.lab",
            "created_at": "2024-06-10T08:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let published = client
        .publish(
            &Hostname::parse("landing").unwrap(),
            &Archive::parse(&bundle).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(published.url, "http://landing.grid.lab");
    assert_eq!(published.id.as_deref(), Some("job-8"));
}

#[tokio::test]
async fn test_publish_missing_archive_is_io_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let dir = tempfile::tempdir().unwrap();
    let missing = Archive::parse(dir.path().join("missing.zip")).unwrap();

    let result = client
        .publish(&Hostname::parse("landing").unwrap(), &missing)
        .await;
    assert!(matches!(result, Err(GridError::Io(_))));
}
