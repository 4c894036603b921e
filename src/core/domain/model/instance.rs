//! Domain model for provisioned instances from the `/instances` endpoint.

use crate::core::domain::value_object::Zone;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A provisioned virtual host tracked by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Instance {
    /// Unique identifier (e.g., "job-1718000000000000000").
    pub id: String,
    /// Host name, either a bare label or a fully qualified name.
    #[serde(default)]
    pub host: String,
    /// IPv4 address assigned to the instance.
    #[serde(default)]
    pub ip: String,
    /// Full access URL, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Creation time in RFC 3339.
    #[serde(default)]
    pub created_at: String,
}

impl Instance {
    /// The URL a user should open for this instance.
    ///
    /// A `url` starting with `http` wins. Otherwise it is derived from
    /// `host`: bare labels are placed under `zone`, dotted names are used
    /// as-is, and an empty host yields an empty string.
    pub fn canonical_url(&self, zone: &Zone) -> String {
        if let Some(url) = self.url.as_deref().filter(|url| url.starts_with("http")) {
            return url.to_string();
        }
        if self.host.is_empty() {
            return String::new();
        }
        format!("http://{}", zone.qualify(&self.host))
    }
}

/// Renders an RFC 3339 timestamp in local time.
///
/// Empty input stays empty and unparseable input is shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
