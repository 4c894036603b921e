use super::create_test_client;
use crate::{DnsAction, GridError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_dns_logs_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/dns-logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "timestamp": "2024-06-10T08:10:00Z",
                "action": "DELETE",
                "fqdn": "landing.grid.lab",
                "ip": "192.168.56.20"
            },
            {
                "timestamp": "2024-06-10T08:00:00Z",
                "action": "ADD",
                "fqdn": "landing.grid.lab",
                "ip": "192.168.56.20"
            }
        ])))
        .mount(&mock_server)
        .await;

    let entries = client.dns_logs().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, DnsAction::Remove);
    assert_eq!(entries[1].action, DnsAction::Add);
    assert_eq!(entries[1].fqdn, "landing.grid.lab");
}

#[tokio::test]
async fn test_dns_logs_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/dns-logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    assert!(client.dns_logs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_dns_direct_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/dns-direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"fqdn": "landing.grid.lab.", "ip": "192.168.56.20"}
        ])))
        .mount(&mock_server)
        .await;

    let records = client.dns_direct().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ip, "192.168.56.20");
}

#[tokio::test]
async fn test_dns_direct_null_is_empty_zone() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/dns-direct"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("null"),
        )
        .mount(&mock_server)
        .await;

    assert_eq!(client.dns_direct().await.unwrap(), Vec::new());
}

#[tokio::test]
async fn test_dns_direct_error_body_is_backend_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/dns-direct"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "zone transfer refused"})),
        )
        .mount(&mock_server)
        .await;

    match client.dns_direct().await {
        Err(GridError::Backend(reason)) => assert_eq!(reason, "zone transfer refused"),
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dns_direct_bad_gateway() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/dns-direct"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_json(serde_json::json!({"error": "dig: connection timed out"})),
        )
        .mount(&mock_server)
        .await;

    match client.dns_direct().await {
        Err(error @ GridError::Api { status: 502, .. }) => {
            assert_eq!(error.reason(), "dig: connection timed out");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}
