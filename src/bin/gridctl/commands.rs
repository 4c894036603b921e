use crate::args::Command;
use anyhow::{Context, Result};
use gridlab::{
    ClientConfig, ConsoleEvent, GridClient, Locale, Message, Panel, PollingController, Status,
    TerminalView, View,
    console::rows::{DnsDirectRow, DnsLogRow, InstanceRow},
};
use std::{io::BufRead, process::ExitCode};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    sync::mpsc,
};
use tracing::{info, warn};

type Console = PollingController<GridClient, TerminalView<std::io::Stdout>>;

pub async fn execute(cmd: Command, client: GridClient, config: &ClientConfig) -> Result<ExitCode> {
    let locale = config.locale;
    match cmd {
        Command::Watch => {
            watch(console(client, config)?).await;
            Ok(ExitCode::SUCCESS)
        }
        Command::Instances => {
            let zone = client.zone().clone();
            let rows: Vec<InstanceRow> = client
                .instances()
                .await
                .context("failed to list instances")?
                .iter()
                .map(|instance| InstanceRow::new(instance, &zone))
                .collect();
            TerminalView::stdout(locale).render_instances(&rows);
            Ok(ExitCode::SUCCESS)
        }
        Command::DnsLogs => {
            let entries = client.dns_logs().await.context("failed to read the DNS log")?;
            let mut view = TerminalView::stdout(locale);
            if entries.is_empty() {
                view.placeholder(Panel::DnsLogs, &Message::DnsLogsEmpty.render(locale));
            } else {
                let rows: Vec<DnsLogRow> = entries.iter().map(DnsLogRow::from).collect();
                view.render_dns_logs(&rows);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::DnsDirect => {
            let records = client.dns_direct().await.context("failed to read the DNS zone")?;
            let mut view = TerminalView::stdout(locale);
            if records.is_empty() {
                view.placeholder(Panel::DnsDirect, &Message::DnsDirectEmpty.render(locale));
            } else {
                let rows: Vec<DnsDirectRow> = records.iter().map(DnsDirectRow::from).collect();
                view.render_dns_direct(&rows);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Prepare { hostname } => {
            let status = console(client, config)?.accept(&hostname).await;
            Ok(exit_code(&status))
        }
        Command::Provision { hostname } => {
            let status = console(client, config)?.provision(&hostname).await;
            Ok(exit_code(&status))
        }
        Command::Publish { hostname, file } => {
            let file = file.to_string_lossy();
            let status = console(client, config)?.publish_to(&hostname, &file).await;
            Ok(exit_code(&status))
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm(locale).await? {
                info!(id = %id, "delete cancelled");
                return Ok(ExitCode::SUCCESS);
            }
            let status = console(client, config)?.delete_instance(&id).await;
            Ok(exit_code(&status))
        }
    }
}

fn console(client: GridClient, config: &ClientConfig) -> Result<Console> {
    let view = TerminalView::stdout(config.locale);
    PollingController::new(client, view, config).context("failed to start the console")
}

fn exit_code(status: &Status) -> ExitCode {
    if status.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Polls until `quit`, end of input or Ctrl-C
async fn watch(mut console: Console) {
    let (tx, rx) = mpsc::channel(16);

    // a pending stdin read must not hold up runtime shutdown
    let lines = tx.clone();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "failed to read stdin");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<ConsoleEvent>() {
                Ok(event) => {
                    if lines.blocking_send(event).is_err() {
                        return;
                    }
                }
                Err(e) => eprintln!("{}", e),
            }
        }
        let _ = lines.blocking_send(ConsoleEvent::Quit);
    });

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = tx.send(ConsoleEvent::Quit).await;
            }
            Err(e) => warn!(error = %e, "failed to listen for Ctrl-C"),
        }
    });

    console.run(rx).await;
}

async fn confirm(locale: Locale) -> Result<bool> {
    let mut stdout = tokio::io::stdout();
    let prompt = format!("{} [y/N] ", Message::ConfirmDelete.render(locale));
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await
        .context("failed to read confirmation")?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    ))
}
