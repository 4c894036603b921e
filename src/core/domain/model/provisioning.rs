//! Responses of the form endpoints (`/prepare`, `/provision`, `/publish`).

use serde::Deserialize;

/// Result of `POST /prepare`: the VM exists and its A record resolves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrepareResponse {
    /// IPv4 address reserved for the host.
    pub ip: String,
    /// Fully qualified name the backend settled on.
    #[serde(default)]
    pub fqdn: Option<String>,
}

/// Result of `POST /provision`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProvisionResponse {
    pub id: String,
}

/// Result of `POST /publish`. The backend answers with the whole
/// instance; only the URL is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublishResponse {
    pub url: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
}

/// The `{error}` body any endpoint may answer with.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
