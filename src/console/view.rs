//! Where the console draws: panels, placeholders and the status line.

use crate::console::{
    Panel,
    messages::Locale,
    rows::{DnsDirectRow, DnsLogRow, InstanceRow},
};
use std::io::{self, Write};
use tabled::{Table, Tabled, settings::Style};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A line of feedback after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// A render target for the polling console.
///
/// Each `render_*` call replaces the whole panel.
#[cfg_attr(test, mockall::automock)]
pub trait View: Send {
    fn render_instances(&mut self, rows: &[InstanceRow]);

    fn render_dns_logs(&mut self, rows: &[DnsLogRow]);

    fn render_dns_direct(&mut self, rows: &[DnsDirectRow]);

    /// Replaces a panel with a single message (empty data or a failure)
    fn placeholder(&mut self, panel: Panel, message: &str);

    fn status(&mut self, status: &Status);
}

/// Prints panels as psql-style tables.
pub struct TerminalView<W> {
    out: W,
    locale: Locale,
}

impl TerminalView<io::Stdout> {
    pub fn stdout(locale: Locale) -> Self {
        Self::new(io::stdout(), locale)
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, locale: Locale) -> Self {
        Self { out, locale }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn panel<T: Tabled>(&mut self, panel: Panel, rows: &[T]) {
        let table = Table::new(rows).with(Style::psql()).to_string();
        self.write(format_args!("\n== {} ==\n{}\n", panel.title(self.locale), table));
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn render_instances(&mut self, rows: &[InstanceRow]) {
        self.panel(Panel::Instances, rows);
    }

    fn render_dns_logs(&mut self, rows: &[DnsLogRow]) {
        self.panel(Panel::DnsLogs, rows);
    }

    fn render_dns_direct(&mut self, rows: &[DnsDirectRow]) {
        self.panel(Panel::DnsDirect, rows);
    }

    fn placeholder(&mut self, panel: Panel, message: &str) {
        self.write(format_args!("\n== {} ==\n{}\n", panel.title(self.locale), message));
    }

    fn status(&mut self, status: &Status) {
        let tag = match status.kind {
            StatusKind::Info => "..",
            StatusKind::Success => "ok",
            StatusKind::Error => "error",
        };
        self.write(format_args!("[{}] {}\n", tag, status.text));
    }
}
