//! Display rows built from the backend records.

use crate::core::domain::{
    model::{
        dns::{DnsDirectRecord, DnsLogEntry},
        instance::{Instance, format_timestamp},
    },
    value_object::Zone,
};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct InstanceRow {
    #[tabled(rename = "URL")]
    pub link: String,
    #[tabled(rename = "IP")]
    pub ip: String,
    #[tabled(rename = "HOST")]
    pub host: String,
    #[tabled(rename = "CREATED")]
    pub created: String,
    #[tabled(rename = "ID")]
    pub id: String,
}

impl InstanceRow {
    pub fn new(instance: &Instance, zone: &Zone) -> Self {
        let canonical = instance.canonical_url(zone);
        let link = if canonical.is_empty() {
            instance.url.clone().unwrap_or_default()
        } else {
            canonical
        };

        Self {
            link,
            ip: instance.ip.clone(),
            host: instance.host.clone(),
            created: format_timestamp(&instance.created_at),
            id: instance.id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct DnsLogRow {
    #[tabled(rename = "TIME")]
    pub time: String,
    #[tabled(rename = "ACTION")]
    pub action: String,
    #[tabled(rename = "FQDN")]
    pub fqdn: String,
    #[tabled(rename = "IP")]
    pub ip: String,
}

impl From<&DnsLogEntry> for DnsLogRow {
    fn from(entry: &DnsLogEntry) -> Self {
        Self {
            time: format_timestamp(&entry.timestamp),
            action: entry.action.to_string(),
            fqdn: entry.fqdn.clone(),
            ip: entry.ip.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct DnsDirectRow {
    #[tabled(rename = "FQDN")]
    pub fqdn: String,
    #[tabled(rename = "IP")]
    pub ip: String,
}

impl From<&DnsDirectRecord> for DnsDirectRow {
    fn from(record: &DnsDirectRecord) -> Self {
        Self {
            fqdn: record.fqdn.clone(),
            ip: record.ip.clone(),
        }
    }
}
