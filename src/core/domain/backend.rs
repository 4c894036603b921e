use crate::core::domain::{
    error::GridResult,
    model::{
        dns::{DnsDirectRecord, DnsLogEntry},
        instance::Instance,
        provisioning::{PrepareResponse, ProvisionResponse, PublishResponse},
    },
    value_object::{Archive, Hostname},
};
use async_trait::async_trait;

/// The operations the polling console needs from the provisioning service.
///
/// `GridClient` is the HTTP implementation; the console only ever talks to
/// this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProvisioningBackend: Send + Sync {
    /// Lists the deployed instances
    async fn instances(&self) -> GridResult<Vec<Instance>>;

    /// Lists the DNS operation log, newest first
    async fn dns_logs(&self) -> GridResult<Vec<DnsLogEntry>>;

    /// Lists the A records currently served by the zone
    ///
    /// # Errors
    ///
    /// Returns `GridError::Backend` when the zone could not be read.
    async fn dns_direct(&self) -> GridResult<Vec<DnsDirectRecord>>;

    /// Creates the VM and DNS record for a host
    async fn prepare(&self, hostname: &Hostname) -> GridResult<PrepareResponse>;

    /// Starts provisioning a host without content
    async fn provision(&self, hostname: &Hostname) -> GridResult<ProvisionResponse>;

    /// Uploads a site bundle to a prepared host
    async fn publish(&self, hostname: &Hostname, archive: &Archive)
    -> GridResult<PublishResponse>;

    /// Destroys an instance by id
    async fn destroy(&self, id: &str) -> GridResult<()>;
}
