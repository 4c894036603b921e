use gridlab::{
    ClientConfig, ConsoleEvent, GridClient, GridResult, Locale, PollingController, TerminalView,
    telemetry,
};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> GridResult<()> {
    telemetry::init_tracing("info")?;

    let config = ClientConfig {
        locale: Locale::En,
        ..ClientConfig::default()
    };
    let client = GridClient::builder()
        .config(config.clone())
        .address("http://127.0.0.1:8080")?
        .build()?;

    let view = TerminalView::stdout(config.locale);
    let mut console = PollingController::new(client, view, &config)?;

    let (tx, rx) = mpsc::channel(4);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(30)).await;
        let _ = tx.send(ConsoleEvent::Quit).await;
    });

    console.run(rx).await;
    Ok(())
}
