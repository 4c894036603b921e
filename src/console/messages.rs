//! User-facing texts of the console, rendered per locale.

use crate::{
    console::Panel,
    core::domain::error::{GridError, ValidationError},
};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Language of status lines and placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}', expected es or en", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Es => f.write_str("es"),
            Locale::En => f.write_str("en"),
        }
    }
}

/// Everything the console can tell a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    HostRequired,
    HostWhitespace,
    HostTooShort { min: usize },
    AcceptFirst,
    ArchiveRequired,
    ArchiveNotZip,
    InvalidInput { reason: String },
    HostAccepted { host: String, ip: String },
    Publishing { file: String, host: String },
    Published { url: String },
    Provisioned { host: String, id: String },
    RequestFailed { reason: String },
    ConfirmDelete,
    DeleteRequested { id: String },
    DnsLogsEmpty,
    DnsLogsUnavailable { reason: String },
    DnsDirectEmpty,
    DnsDirectUnavailable { reason: String },
}

impl Message {
    /// Maps a failed operation to the message shown to the user
    pub fn from_error(error: &GridError) -> Self {
        match error {
            GridError::Validation { source } => Message::from(source),
            other => Message::RequestFailed {
                reason: other.reason(),
            },
        }
    }

    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::Es => self.spanish(),
            Locale::En => self.english(),
        }
    }

    fn spanish(&self) -> String {
        match self {
            Message::HostRequired => "Por favor ingresa un nombre de host.".to_string(),
            Message::HostWhitespace => {
                "Nombre de host no válido: no puede contener espacios.".to_string()
            }
            Message::HostTooShort { min } => format!(
                "Nombre de host no válido: debe tener al menos {} caracteres.",
                min
            ),
            Message::AcceptFirst => {
                "Primero ingresa el nombre de host y pulsa Aceptar.".to_string()
            }
            Message::ArchiveRequired => {
                "Selecciona un archivo .zip con tu contenido web.".to_string()
            }
            Message::ArchiveNotZip => "El archivo debe ser .zip".to_string(),
            Message::InvalidInput { reason } => format!("Dato no válido: {}", reason),
            Message::HostAccepted { host, ip } => format!(
                "Host \"{}\" aceptado (IP {}). Listo para publicar.",
                host, ip
            ),
            Message::Publishing { file, host } => {
                format!("Subiendo \"{}\" y desplegando en {} ...", file, host)
            }
            Message::Published { url } => format!("¡Publicado! Accede a: {}", url),
            Message::Provisioned { host, id } => {
                format!("Instancia {} creada para \"{}\".", id, host)
            }
            Message::RequestFailed { reason } => format!("Error: {}", reason),
            Message::ConfirmDelete => "¿Eliminar esta instancia?".to_string(),
            Message::DeleteRequested { id } => {
                format!("Eliminación de {} solicitada, recargando vistas.", id)
            }
            Message::DnsLogsEmpty => "No hay registros DNS todavía.".to_string(),
            Message::DnsLogsUnavailable { reason } => {
                format!("No se pudieron cargar los registros DNS: {}", reason)
            }
            Message::DnsDirectEmpty => "La zona no tiene registros A.".to_string(),
            Message::DnsDirectUnavailable { reason } => {
                zone_failure("Error leyendo zona DNS", reason)
            }
        }
    }

    fn english(&self) -> String {
        match self {
            Message::HostRequired => "Please enter a host name.".to_string(),
            Message::HostWhitespace => {
                "Invalid host name: it cannot contain whitespace.".to_string()
            }
            Message::HostTooShort { min } => format!(
                "Invalid host name: it must be at least {} characters long.",
                min
            ),
            Message::AcceptFirst => "Enter the host name and press Accept first.".to_string(),
            Message::ArchiveRequired => "Select a .zip file with your web content.".to_string(),
            Message::ArchiveNotZip => "The file must be a .zip".to_string(),
            Message::InvalidInput { reason } => format!("Invalid input: {}", reason),
            Message::HostAccepted { host, ip } => {
                format!("Host \"{}\" accepted (IP {}). Ready to publish.", host, ip)
            }
            Message::Publishing { file, host } => {
                format!("Uploading \"{}\" and deploying to {} ...", file, host)
            }
            Message::Published { url } => format!("Published! Visit: {}", url),
            Message::Provisioned { host, id } => {
                format!("Instance {} created for \"{}\".", id, host)
            }
            Message::RequestFailed { reason } => format!("Error: {}", reason),
            Message::ConfirmDelete => "Delete this instance?".to_string(),
            Message::DeleteRequested { id } => {
                format!("Removal of {} requested, reloading views.", id)
            }
            Message::DnsLogsEmpty => "No DNS records yet.".to_string(),
            Message::DnsLogsUnavailable { reason } => {
                format!("Could not load the DNS log: {}", reason)
            }
            Message::DnsDirectEmpty => "The zone has no A records.".to_string(),
            Message::DnsDirectUnavailable { reason } => {
                zone_failure("Error reading the DNS zone", reason)
            }
        }
    }
}

/// The backend words its own zone failures; those are shown as they come.
fn zone_failure(prefix: &str, reason: &str) -> String {
    if reason.starts_with(BACKEND_ZONE_FAILURE) || reason.starts_with(prefix) {
        reason.to_string()
    } else {
        format!("{}: {}", prefix, reason)
    }
}

const BACKEND_ZONE_FAILURE: &str = "Error leyendo zona DNS";

impl From<&ValidationError> for Message {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::Empty { field: "file" } => Message::ArchiveRequired,
            ValidationError::Empty { .. } => Message::HostRequired,
            ValidationError::Whitespace { .. } => Message::HostWhitespace,
            ValidationError::TooShort { min, .. } => Message::HostTooShort { min: *min },
            ValidationError::Extension { .. } => Message::ArchiveNotZip,
            other => Message::InvalidInput {
                reason: other.to_string(),
            },
        }
    }
}

impl Panel {
    /// Heading printed above the panel
    pub fn title(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Panel::Instances, Locale::Es) => "Instancias",
            (Panel::Instances, Locale::En) => "Instances",
            (Panel::DnsLogs, Locale::Es) => "Registro DNS",
            (Panel::DnsLogs, Locale::En) => "DNS log",
            (Panel::DnsDirect, Locale::Es) => "Zona DNS",
            (Panel::DnsDirect, Locale::En) => "DNS zone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::value_object::{Archive, Hostname};

    fn message_for_host(raw: &str) -> Message {
        Message::from_error(&Hostname::parse(raw).unwrap_err())
    }

    #[test]
    fn test_each_host_violation_has_its_own_message() {
        let empty = message_for_host("");
        let spaced = message_for_host("a b c");
        let short = message_for_host("ab");

        assert_eq!(empty, Message::HostRequired);
        assert_eq!(spaced, Message::HostWhitespace);
        assert_eq!(short, Message::HostTooShort { min: 3 });

        for locale in [Locale::Es, Locale::En] {
            let texts = [
                empty.render(locale),
                spaced.render(locale),
                short.render(locale),
                Message::ArchiveNotZip.render(locale),
            ];
            for (i, a) in texts.iter().enumerate() {
                for b in texts.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_archive_violations() {
        assert_eq!(
            Message::from_error(&Archive::parse("").unwrap_err()),
            Message::ArchiveRequired
        );
        assert_eq!(
            Message::from_error(&Archive::parse("site.rar").unwrap_err()),
            Message::ArchiveNotZip
        );
    }

    #[test]
    fn test_backend_failure_keeps_reason() {
        let err = GridError::Api {
            status: 502,
            message: "DNS A no disponible para site.grid.lab".to_string(),
        };
        assert_eq!(
            Message::from_error(&err).render(Locale::Es),
            "Error: DNS A no disponible para site.grid.lab"
        );
    }

    #[test]
    fn test_zone_failure_is_not_prefixed_twice() {
        let from_backend = Message::DnsDirectUnavailable {
            reason: "Error leyendo zona DNS: exit status 1".to_string(),
        };
        assert_eq!(
            from_backend.render(Locale::Es),
            "Error leyendo zona DNS: exit status 1"
        );
        assert_eq!(
            from_backend.render(Locale::En),
            "Error leyendo zona DNS: exit status 1"
        );

        let local = Message::DnsDirectUnavailable {
            reason: "Connection error: connection refused".to_string(),
        };
        assert_eq!(
            local.render(Locale::En),
            "Error reading the DNS zone: Connection error: connection refused"
        );
    }

    #[test]
    fn test_spanish_is_default() {
        assert_eq!(Locale::default(), Locale::Es);
        assert_eq!(
            Message::Published {
                url: "http://site.grid.lab".to_string()
            }
            .render(Locale::default()),
            "¡Publicado! Accede a: http://site.grid.lab"
        );
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" es ".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
    }
}
