//! The two-step accept/publish form.

use crate::{
    console::messages::Message,
    core::domain::value_object::{Archive, Hostname},
};

/// Holds the host accepted in the first step until a bundle is published.
#[derive(Debug, Default, Clone)]
pub struct PublishForm {
    accepted: Option<Hostname>,
}

impl PublishForm {
    /// Validates raw host input: not empty, no whitespace, minimum length
    pub fn check_host(raw: &str) -> Result<Hostname, Message> {
        Hostname::parse(raw).map_err(|e| Message::from_error(&e))
    }

    pub fn accept(&mut self, hostname: Hostname) {
        self.accepted = Some(hostname);
    }

    pub fn accepted(&self) -> Option<&Hostname> {
        self.accepted.as_ref()
    }

    /// Checks that the second step can run: a host was accepted and the
    /// file is a zip bundle.
    pub fn ready(&self, file: &str) -> Result<(Hostname, Archive), Message> {
        let hostname = self.accepted.clone().ok_or(Message::AcceptFirst)?;
        if file.trim().is_empty() {
            return Err(Message::ArchiveRequired);
        }
        let archive = Archive::parse(file.trim()).map_err(|e| Message::from_error(&e))?;
        Ok((hostname, archive))
    }
}
