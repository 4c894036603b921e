use crate::{GridClient, GridResult};
use dotenvy::dotenv;
use std::env;

fn setup() -> GridClient {
    dotenv().ok();
    let address = env::var("GRIDLAB_ADDRESS").expect("GRIDLAB_ADDRESS not set");
    GridClient::builder()
        .address(address)
        .expect("invalid address")
        .build()
        .expect("failed to build client")
}

#[tokio::test]
#[ignore = "requires a running provisioning service and GRIDLAB_ADDRESS"]
async fn test_integration_list_collections() -> GridResult<()> {
    let client = setup();

    let instances = client.instances().await?;
    for instance in &instances {
        assert!(!instance.id.is_empty());
    }

    client.dns_logs().await?;
    // the zone may legitimately be unreadable, but never malformed
    if let Err(e) = client.dns_direct().await {
        assert!(!matches!(e, crate::GridError::Payload(_)), "{:?}", e);
    }

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running provisioning service and GRIDLAB_ADDRESS"]
async fn test_integration_destroy_unknown_instance() {
    let client = setup();
    let result = client.destroy("job-does-not-exist").await;
    assert!(result.is_err());
}
