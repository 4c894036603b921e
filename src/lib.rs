pub mod config;
pub mod console;
mod core;
pub mod telemetry;

pub use crate::config::{ClientConfig, DeleteRoute, PollingConfig, RateLimitConfig};
pub use crate::console::{
    ConsoleEvent, Panel, PollingController,
    messages::{Locale, Message},
    view::{Status, StatusKind, TerminalView, View},
};
pub use crate::core::domain::{
    backend::ProvisioningBackend,
    error::{GridError, GridResult, ValidationError},
    model::{
        dns::{DnsAction, DnsDirectRecord, DnsLogEntry},
        instance::{Instance, format_timestamp},
        provisioning::{PrepareResponse, ProvisionResponse, PublishResponse},
    },
    value_object::{Archive, Hostname, ValueObject, Zone},
};
use crate::core::{
    domain::model::dns::DnsDirectPayload, infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

/// A Client for the grid.lab provisioning and DNS service
///
/// This client provides typed access to:
/// - The instance collection and instance removal
/// - The DNS operation log and the live zone records
/// - The prepare / provision / publish form endpoints
///
/// # Examples
///
/// ```no_run
/// use gridlab::{GridClient, GridResult, Hostname};
///
/// #[tokio::main]
/// async fn main() -> GridResult<()> {
///     let client = GridClient::builder()
///         .address("http://127.0.0.1:8080")?
///         .build()?;
///
///     for instance in client.instances().await? {
///         println!("{} -> {}", instance.id, instance.canonical_url(client.zone()));
///     }
///
///     let prepared = client.prepare(&Hostname::parse("landing")?).await?;
///     println!("reserved {}", prepared.ip);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GridClient {
    pub(crate) api_client: ApiClient,
    pub(crate) config: ClientConfig,
    pub(crate) zone: Zone,
}

/// Builder for GridClient configuration
#[derive(Debug, Default)]
pub struct GridClientBuilder {
    address: Option<String>,
    config: Option<ClientConfig>,
}

impl GridClientBuilder {
    /// Sets the service address, overriding the one in the configuration
    pub fn address(mut self, address: impl Into<String>) -> GridResult<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(ValidationError::Empty { field: "address" }.into());
        }
        self.address = Some(address);
        Ok(self)
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> GridResult<GridClient> {
        let mut config = self.config.unwrap_or_default();
        if let Some(address) = self.address {
            config.address = address;
        }
        config.validate()?;

        let zone = config.zone()?;
        let api_client = ApiClient::new(config.base_url()?, &config)?;
        debug!(address = %api_client.base_url(), %zone, "client configured");

        Ok(GridClient {
            api_client,
            config,
            zone,
        })
    }
}

impl GridClient {
    /// Creates a new builder for GridClient configuration
    pub fn builder() -> GridClientBuilder {
        GridClientBuilder::default()
    }

    /// The zone bare host names are placed under
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Lists all deployed instances (`GET /instances`)
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The server is unreachable
    /// - The server returns a non-success status
    /// - The body is not an array of instance records
    pub async fn instances(&self) -> GridResult<Vec<Instance>> {
        self.api_client.get(&["instances"]).await
    }

    /// Lists the DNS operation log (`GET /dns-logs`), newest first
    pub async fn dns_logs(&self) -> GridResult<Vec<DnsLogEntry>> {
        self.api_client.get(&["dns-logs"]).await
    }

    /// Lists the A records read from the zone (`GET /dns-direct`)
    ///
    /// # Errors
    ///
    /// A body of the form `{"error": ...}` becomes `GridError::Backend`, or
    /// `GridError::Api` when it comes with a failure status.
    pub async fn dns_direct(&self) -> GridResult<Vec<DnsDirectRecord>> {
        match self.api_client.get(&["dns-direct"]).await? {
            DnsDirectPayload::Records(records) => Ok(records.unwrap_or_default()),
            DnsDirectPayload::Failure { error } => Err(GridError::Backend(error)),
        }
    }

    /// Creates the VM and DNS record for a host (`POST /prepare`)
    pub async fn prepare(&self, hostname: &Hostname) -> GridResult<PrepareResponse> {
        info!(%hostname, "preparing host");
        self.api_client
            .post_form(&["prepare"], Self::host_form(hostname))
            .await
    }

    /// Provisions a host without content (`POST /provision`)
    pub async fn provision(&self, hostname: &Hostname) -> GridResult<ProvisionResponse> {
        info!(%hostname, "provisioning host");
        self.api_client
            .post_form(&["provision"], Self::host_form(hostname))
            .await
    }

    /// Uploads a zip bundle to a prepared host (`POST /publish`)
    ///
    /// # Errors
    ///
    /// Returns `GridError::Io` if the archive cannot be read.
    pub async fn publish(
        &self,
        hostname: &Hostname,
        archive: &Archive,
    ) -> GridResult<PublishResponse> {
        let contents = tokio::fs::read(archive.path()).await?;
        info!(%hostname, file = %archive.file_name(), bytes = contents.len(), "publishing site");

        let part = Part::bytes(contents)
            .file_name(archive.file_name())
            .mime_str("application/zip")
            .map_err(|e| GridError::Connection(e.to_string()))?;
        let form = Self::host_form(hostname).part("file", part);

        self.api_client.post_form(&["publish"], form).await
    }

    /// Destroys an instance by id using the configured delete route
    pub async fn destroy(&self, id: &str) -> GridResult<()> {
        let segments = self.config.delete_route.segments(id);
        let status = self.api_client.delete(&segments).await?;
        info!(id, %status, "instance destroyed");
        Ok(())
    }

    fn host_form(hostname: &Hostname) -> Form {
        Form::new().text("hostname", hostname.as_str().to_string())
    }
}

#[async_trait]
impl ProvisioningBackend for GridClient {
    async fn instances(&self) -> GridResult<Vec<Instance>> {
        GridClient::instances(self).await
    }

    async fn dns_logs(&self) -> GridResult<Vec<DnsLogEntry>> {
        GridClient::dns_logs(self).await
    }

    async fn dns_direct(&self) -> GridResult<Vec<DnsDirectRecord>> {
        GridClient::dns_direct(self).await
    }

    async fn prepare(&self, hostname: &Hostname) -> GridResult<PrepareResponse> {
        GridClient::prepare(self, hostname).await
    }

    async fn provision(&self, hostname: &Hostname) -> GridResult<ProvisionResponse> {
        GridClient::provision(self, hostname).await
    }

    async fn publish(
        &self,
        hostname: &Hostname,
        archive: &Archive,
    ) -> GridResult<PublishResponse> {
        GridClient::publish(self, hostname, archive).await
    }

    async fn destroy(&self, id: &str) -> GridResult<()> {
        GridClient::destroy(self, id).await
    }
}

#[cfg(test)]
mod tests;
