use crate::{ClientConfig, DeleteRoute, GridClient};
use wiremock::MockServer;

mod dns_tests;
mod instance_tests;
mod provisioning_tests;

fn create_test_client(mock_server: &MockServer) -> GridClient {
    create_client_with(mock_server, ClientConfig::default())
}

fn create_client_with(mock_server: &MockServer, config: ClientConfig) -> GridClient {
    GridClient::builder()
        .config(config)
        .address(mock_server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn api_instances_config() -> ClientConfig {
    ClientConfig {
        delete_route: DeleteRoute::ApiInstances,
        ..ClientConfig::default()
    }
}
