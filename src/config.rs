//! Client configuration: file format, defaults and validation.

use crate::{
    console::messages::Locale,
    core::domain::{
        error::{GridError, GridResult},
        value_object::Zone,
    },
};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tokio::fs;
use url::Url;

/// Parse the configuration from a TOML file
///
/// Missing keys fall back to their defaults; the result is validated.
pub async fn parse<P: AsRef<Path>>(path: P) -> GridResult<ClientConfig> {
    let raw = fs::read_to_string(path.as_ref()).await?;
    let config: ClientConfig = toml::from_str(&raw).map_err(|e| {
        GridError::Config(format!(
            "failed to parse {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    config.validate()?;
    Ok(config)
}

/// Everything the client and the console can be tuned with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base address of the provisioning service
    pub address: String,
    /// Zone appended to bare host names
    pub zone: String,
    /// Language of user-facing messages
    pub locale: Locale,
    /// Which route deletes an instance
    pub delete_route: DeleteRoute,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    pub polling: PollingConfig,
    /// Optional client-side request throttle
    pub rate_limit: Option<RateLimitConfig>,
    /// Default tracing filter for the binary
    pub log: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:8080".to_string(),
            zone: "grid.lab".to_string(),
            locale: Locale::default(),
            delete_route: DeleteRoute::default(),
            request_timeout_ms: 30_000,
            polling: PollingConfig::default(),
            rate_limit: None,
            log: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Checks the values that would otherwise fail later at runtime
    pub fn validate(&self) -> GridResult<()> {
        self.base_url()?;
        self.zone()?;

        if self.request_timeout_ms == 0 {
            return Err(GridError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }

        for (name, value) in [
            ("polling.instances_ms", self.polling.instances_ms),
            ("polling.dns_logs_ms", self.polling.dns_logs_ms),
            ("polling.dns_direct_ms", self.polling.dns_direct_ms),
        ] {
            if value == 0 {
                return Err(GridError::Config(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }

        if let Some(rate_limit) = &self.rate_limit {
            if rate_limit.requests_per_second == 0 || rate_limit.burst_size == 0 {
                return Err(GridError::Config(
                    "rate_limit values must be greater than zero".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// The service address as a URL; only http and https are accepted
    pub fn base_url(&self) -> GridResult<Url> {
        let url = Url::parse(&self.address)
            .map_err(|e| GridError::Config(format!("invalid address '{}': {}", self.address, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(GridError::Config(format!(
                "unsupported scheme '{}', expected http or https",
                scheme
            ))),
        }
    }

    pub fn zone(&self) -> GridResult<Zone> {
        Zone::parse(&self.zone)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// How often each panel is refreshed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub instances_ms: u64,
    pub dns_logs_ms: u64,
    pub dns_direct_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            instances_ms: 3_000,
            dns_logs_ms: 5_000,
            dns_direct_ms: 10_000,
        }
    }
}

impl PollingConfig {
    pub fn instances(&self) -> Duration {
        Duration::from_millis(self.instances_ms)
    }

    pub fn dns_logs(&self) -> Duration {
        Duration::from_millis(self.dns_logs_ms)
    }

    pub fn dns_direct(&self) -> Duration {
        Duration::from_millis(self.dns_direct_ms)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// The delete endpoint differs between backend versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeleteRoute {
    /// `DELETE /destroy/{id}`
    #[default]
    Destroy,
    /// `DELETE /api/instances/{id}`
    ApiInstances,
}

impl DeleteRoute {
    pub fn segments<'a>(&self, id: &'a str) -> Vec<&'a str> {
        match self {
            DeleteRoute::Destroy => vec!["destroy", id],
            DeleteRoute::ApiInstances => vec!["api", "instances", id],
        }
    }
}
