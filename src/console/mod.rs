//! The polling console: keeps three panels in sync with the backend and
//! drives the accept/publish form.

pub mod form;
pub mod messages;
pub mod rows;
pub mod snapshot;
pub mod timers;
pub mod view;

use crate::{
    config::{ClientConfig, PollingConfig},
    core::domain::{
        backend::ProvisioningBackend, error::GridResult, value_object::Zone,
    },
};
use form::PublishForm;
use messages::{Locale, Message};
use rows::{DnsDirectRow, DnsLogRow, InstanceRow};
use snapshot::Snapshot;
use std::str::FromStr;
use timers::PollTimers;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use view::{Status, StatusKind, View};

/// The panels the console keeps refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Instances,
    DnsLogs,
    DnsDirect,
}

/// A user action delivered to a running console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// First form step: validate and prepare a host
    Accept(String),
    /// Second form step: upload a bundle to the accepted host
    Publish(String),
    Provision(String),
    /// Remove an instance by id
    Delete(String),
    /// Reload every panel now
    Refresh,
    Quit,
}

impl FromStr for ConsoleEvent {
    type Err = String;

    /// Parses a command line such as `accept site` or `delete job-42`.
    ///
    /// The argument is the rest of the line, so spaces are kept and left to
    /// validation.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "accept" => Ok(ConsoleEvent::Accept(argument.to_string())),
            "publish" => Ok(ConsoleEvent::Publish(argument.to_string())),
            "provision" => Ok(ConsoleEvent::Provision(argument.to_string())),
            "delete" if !argument.is_empty() => Ok(ConsoleEvent::Delete(argument.to_string())),
            "delete" => Err("usage: delete <id>".to_string()),
            "refresh" => Ok(ConsoleEvent::Refresh),
            "quit" | "exit" => Ok(ConsoleEvent::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!(
                "unknown command '{}' (accept, publish, provision, delete, refresh, quit)",
                other
            )),
        }
    }
}

/// Everything the console remembers between polls.
#[derive(Debug, Default)]
pub struct ClientState {
    pub instances: Snapshot,
    pub dns_logs: Snapshot,
    pub dns_direct: Snapshot,
    pub form: PublishForm,
}

enum Step {
    Tick(Panel),
    Event(Option<ConsoleEvent>),
}

/// Fetches the backend collections, re-renders panels whose data changed,
/// and runs the form flow.
///
/// Failures never escape: they are logged and shown as a status line or a
/// placeholder panel.
pub struct PollingController<B, V> {
    backend: B,
    view: V,
    zone: Zone,
    locale: Locale,
    polling: PollingConfig,
    state: ClientState,
    timers: Option<PollTimers>,
}

impl<B, V> PollingController<B, V>
where
    B: ProvisioningBackend,
    V: View,
{
    pub fn new(backend: B, view: V, config: &ClientConfig) -> GridResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            view,
            zone: config.zone()?,
            locale: config.locale,
            polling: config.polling.clone(),
            state: ClientState::default(),
            timers: None,
        })
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn is_polling(&self) -> bool {
        self.timers.is_some()
    }

    /// Starts the three poll timers; each fires right away
    pub fn start_polling(&mut self) {
        self.timers = Some(PollTimers::start(&self.polling));
    }

    pub fn stop_polling(&mut self) {
        self.timers = None;
    }

    /// Fetches the instances and replaces the table if they changed.
    ///
    /// With `force`, a successful fetch also restarts the instance timer.
    /// Returns whether the table was redrawn.
    pub async fn load_and_render(&mut self, force: bool) -> bool {
        let instances = match self.backend.instances().await {
            Ok(instances) => instances,
            Err(e) => {
                warn!(error = %e, "failed to load instances");
                return false;
            }
        };

        if force {
            if let Some(timers) = self.timers.as_mut() {
                timers.restart(Panel::Instances);
            }
        }

        match self.state.instances.update(&instances) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => {
                warn!(error = %e, "failed to snapshot instances");
                return false;
            }
        }

        let rows: Vec<InstanceRow> = instances
            .iter()
            .map(|instance| InstanceRow::new(instance, &self.zone))
            .collect();
        debug!(count = rows.len(), "rendering instances");
        self.view.render_instances(&rows);
        true
    }

    /// Refreshes the DNS log panel. Returns whether it was redrawn.
    pub async fn load_dns_logs(&mut self) -> bool {
        match self.backend.dns_logs().await {
            Ok(entries) => {
                if !self.snapshot_changed(Panel::DnsLogs, &entries) {
                    return false;
                }
                if entries.is_empty() {
                    let text = Message::DnsLogsEmpty.render(self.locale);
                    self.view.placeholder(Panel::DnsLogs, &text);
                } else {
                    let rows: Vec<DnsLogRow> = entries.iter().map(DnsLogRow::from).collect();
                    self.view.render_dns_logs(&rows);
                }
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to load DNS log");
                let reason = e.reason();
                if !self.state.dns_logs.update_failure(&reason) {
                    return false;
                }
                let text = Message::DnsLogsUnavailable { reason }.render(self.locale);
                self.view.placeholder(Panel::DnsLogs, &text);
                true
            }
        }
    }

    /// Refreshes the DNS zone panel. Returns whether it was redrawn.
    pub async fn load_dns_direct(&mut self) -> bool {
        match self.backend.dns_direct().await {
            Ok(records) => {
                if !self.snapshot_changed(Panel::DnsDirect, &records) {
                    return false;
                }
                if records.is_empty() {
                    let text = Message::DnsDirectEmpty.render(self.locale);
                    self.view.placeholder(Panel::DnsDirect, &text);
                } else {
                    let rows: Vec<DnsDirectRow> = records.iter().map(DnsDirectRow::from).collect();
                    self.view.render_dns_direct(&rows);
                }
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to load DNS zone");
                let reason = e.reason();
                if !self.state.dns_direct.update_failure(&reason) {
                    return false;
                }
                let text = Message::DnsDirectUnavailable { reason }.render(self.locale);
                self.view.placeholder(Panel::DnsDirect, &text);
                true
            }
        }
    }

    /// Forced instance reload followed by both DNS panels
    pub async fn reload_all(&mut self) {
        self.load_and_render(true).await;
        self.load_dns_logs().await;
        self.load_dns_direct().await;
    }

    /// Requests removal of an instance, then reloads every panel whatever
    /// the outcome was.
    pub async fn delete_instance(&mut self, id: &str) -> Status {
        match self.backend.destroy(id).await {
            Ok(()) => info!(id, "instance removed"),
            Err(e) => warn!(id, error = %e, "delete failed, reloading anyway"),
        }
        let status = self.report(
            StatusKind::Info,
            Message::DeleteRequested { id: id.to_string() },
        );
        self.reload_all().await;
        status
    }

    /// First form step: validate the host and prepare it on the backend.
    pub async fn accept(&mut self, raw_host: &str) -> Status {
        let hostname = match PublishForm::check_host(raw_host) {
            Ok(hostname) => hostname,
            Err(message) => return self.report(StatusKind::Error, message),
        };

        match self.backend.prepare(&hostname).await {
            Ok(prepared) => {
                let host = prepared.fqdn.unwrap_or_else(|| hostname.to_string());
                self.state.form.accept(hostname);
                self.report(
                    StatusKind::Success,
                    Message::HostAccepted {
                        host,
                        ip: prepared.ip,
                    },
                )
            }
            Err(e) => {
                warn!(%hostname, error = %e, "prepare failed");
                self.report(StatusKind::Error, Message::from_error(&e))
            }
        }
    }

    /// Second form step: upload a zip bundle to the accepted host.
    pub async fn publish(&mut self, file: &str) -> Status {
        let (hostname, archive) = match self.state.form.ready(file) {
            Ok(ready) => ready,
            Err(message) => return self.report(StatusKind::Error, message),
        };

        self.report(
            StatusKind::Info,
            Message::Publishing {
                file: archive.file_name(),
                host: hostname.to_string(),
            },
        );

        match self.backend.publish(&hostname, &archive).await {
            Ok(published) => {
                let status = self.report(
                    StatusKind::Success,
                    Message::Published { url: published.url },
                );
                self.reload_all().await;
                status
            }
            Err(e) => {
                warn!(%hostname, error = %e, "publish failed");
                self.report(StatusKind::Error, Message::from_error(&e))
            }
        }
    }

    /// Publishes to a host that was prepared earlier, skipping the prepare
    /// call of `accept`.
    pub async fn publish_to(&mut self, raw_host: &str, file: &str) -> Status {
        match PublishForm::check_host(raw_host) {
            Ok(hostname) => self.state.form.accept(hostname),
            Err(message) => return self.report(StatusKind::Error, message),
        }
        self.publish(file).await
    }

    pub async fn provision(&mut self, raw_host: &str) -> Status {
        let hostname = match PublishForm::check_host(raw_host) {
            Ok(hostname) => hostname,
            Err(message) => return self.report(StatusKind::Error, message),
        };

        match self.backend.provision(&hostname).await {
            Ok(provisioned) => {
                let status = self.report(
                    StatusKind::Success,
                    Message::Provisioned {
                        host: hostname.to_string(),
                        id: provisioned.id,
                    },
                );
                self.reload_all().await;
                status
            }
            Err(e) => {
                warn!(%hostname, error = %e, "provision failed");
                self.report(StatusKind::Error, Message::from_error(&e))
            }
        }
    }

    /// Applies one user action. Returns false once the console should stop.
    pub async fn handle(&mut self, event: ConsoleEvent) -> bool {
        debug!(?event, "handling console event");
        match event {
            ConsoleEvent::Accept(host) => {
                self.accept(&host).await;
            }
            ConsoleEvent::Publish(file) => {
                self.publish(&file).await;
            }
            ConsoleEvent::Provision(host) => {
                self.provision(&host).await;
            }
            ConsoleEvent::Delete(id) => {
                self.delete_instance(&id).await;
            }
            ConsoleEvent::Refresh => self.reload_all().await,
            ConsoleEvent::Quit => return false,
        }
        true
    }

    /// Polls every panel on its own interval and applies user actions until
    /// `Quit` arrives or the sender side closes. The timers are torn down on
    /// return.
    pub async fn run(&mut self, mut events: mpsc::Receiver<ConsoleEvent>) {
        self.start_polling();
        info!(
            instances_ms = self.polling.instances_ms,
            dns_logs_ms = self.polling.dns_logs_ms,
            dns_direct_ms = self.polling.dns_direct_ms,
            "polling started"
        );

        loop {
            let step = {
                let Some(timers) = self.timers.as_mut() else {
                    break;
                };
                tokio::select! {
                    panel = timers.next_tick() => Step::Tick(panel),
                    event = events.recv() => Step::Event(event),
                }
            };

            match step {
                Step::Tick(Panel::Instances) => {
                    self.load_and_render(false).await;
                }
                Step::Tick(Panel::DnsLogs) => {
                    self.load_dns_logs().await;
                }
                Step::Tick(Panel::DnsDirect) => {
                    self.load_dns_direct().await;
                }
                Step::Event(Some(event)) => {
                    if !self.handle(event).await {
                        break;
                    }
                }
                Step::Event(None) => break,
            }
        }

        self.stop_polling();
        info!("polling stopped");
    }

    fn snapshot_changed<T: serde::Serialize>(&mut self, panel: Panel, data: &T) -> bool {
        let snapshot = match panel {
            Panel::Instances => &mut self.state.instances,
            Panel::DnsLogs => &mut self.state.dns_logs,
            Panel::DnsDirect => &mut self.state.dns_direct,
        };
        match snapshot.update(data) {
            Ok(changed) => changed,
            Err(e) => {
                warn!(?panel, error = %e, "failed to snapshot panel");
                false
            }
        }
    }

    fn report(&mut self, kind: StatusKind, message: Message) -> Status {
        let status = Status {
            kind,
            text: message.render(self.locale),
        };
        self.view.status(&status);
        status
    }
}
