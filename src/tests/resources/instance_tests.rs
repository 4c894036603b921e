use super::{api_instances_config, create_client_with, create_test_client};
use crate::GridError;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn test_instances_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/instances"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "job-1718000000000000000",
                "host": "landing",
                "ip": "192.168.56.20",
                "created_at": "2024-06-10T08:00:00Z"
            },
            {
                "id": "job-1718000000000000001",
                "host": "docs.example.org",
                "ip": "192.168.56.21",
                "url": "http://docs.example.org",
                "created_at": "2024-06-10T08:05:00Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let instances = client.instances().await.unwrap();
    assert_eq!(instances.len(), 2);

    assert_eq!(instances[0].id, "job-1718000000000000000");
    assert_eq!(instances[0].url, None);
    assert_eq!(instances[0].canonical_url(client.zone()), "http://landing.grid.lab");
    assert_eq!(
        instances[1].canonical_url(client.zone()),
        "http://docs.example.org"
    );
}

#[tokio::test]
async fn test_instances_non_array_is_payload_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/instances"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"instances": []})),
        )
        .mount(&mock_server)
        .await;

    let result = client.instances().await;
    assert!(matches!(result, Err(GridError::Payload(_))));
}

#[tokio::test]
async fn test_instances_server_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/instances"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database locked"))
        .mount(&mock_server)
        .await;

    match client.instances().await {
        Err(GridError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database locked");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_destroy_default_route() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/destroy/job-42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.destroy("job-42").await.unwrap();
}

#[tokio::test]
async fn test_destroy_api_instances_route() {
    let mock_server = MockServer::start().await;
    let client = create_client_with(&mock_server, api_instances_config());

    Mock::given(method("DELETE"))
        .and(path("/api/instances/job-42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.destroy("job-42").await.unwrap();
}

#[tokio::test]
async fn test_destroy_failure_surfaces_status() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/destroy/job-404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "not found"})),
        )
        .mount(&mock_server)
        .await;

    match client.destroy("job-404").await {
        Err(GridError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}
