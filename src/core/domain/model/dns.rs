//! Domain models for the DNS panels: the operation log from `/dns-logs`
//! and the live A records from `/dns-direct`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of change recorded in the DNS log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsAction {
    Add,
    /// The backend writes `DELETE` for removals.
    #[serde(alias = "DELETE")]
    Remove,
}

impl fmt::Display for DnsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsAction::Add => f.write_str("ADD"),
            DnsAction::Remove => f.write_str("REMOVE"),
        }
    }
}

/// One entry of the append-only DNS operation log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsLogEntry {
    pub action: DnsAction,
    pub fqdn: String,
    pub ip: String,
    /// UTC timestamp in RFC 3339.
    pub timestamp: String,
}

/// An A record read from the authoritative zone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsDirectRecord {
    pub fqdn: String,
    pub ip: String,
}

/// Body of `/dns-direct`: either the records or the reason the zone
/// could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DnsDirectPayload {
    /// A zone without A records comes back as `null`
    Records(Option<Vec<DnsDirectRecord>>),
    Failure { error: String },
}
