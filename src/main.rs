use std::io::Write;
use std::sync::Arc;
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pos_ledger::config::AppConfig;
use pos_ledger::domain::order::LedgerSession;
use pos_ledger::metrics::Metrics;
use pos_ledger::ui::{self, Flow, ScreenOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the screen.
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run 2>till.log
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = AppConfig::from_args();
    tracing::info!(
        catalog = ?config.catalog_path,
        notifier = ?config.notifier,
        "Starting till"
    );

    let catalog = Arc::new(config.load_catalog()?);
    let metrics = Arc::new(Metrics::new().context("Failed to create metrics registry")?);

    let mut session = LedgerSession::new(catalog)
        .with_notifier(config.build_notifier(), config.retry.clone())
        .with_metrics(metrics.clone());

    let options = ScreenOptions {
        currency_symbol: config.currency_symbol.clone(),
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut status: Option<String> = None;

    loop {
        print!("{}{}", ui::CLEAR, ui::render_screen(&session, &options));
        if let Some(message) = status.take() {
            println!("\n{}", message);
        }
        print!("\n> ");
        std::io::stdout().flush().context("Failed to write to terminal")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break; // stdin closed
        };

        let flow = match ui::parse_action(&line) {
            Ok(action) => ui::dispatch(&mut session, action),
            Err(e) => Flow::Continue(Some(e.to_string())),
        };

        match flow {
            Flow::Continue(message) => status = message,
            Flow::Quit => break,
        }
    }

    tracing::info!(
        orders_completed = metrics.orders_completed.get(),
        items_added = metrics.items_added.get(),
        "Till closed"
    );

    match metrics.render() {
        Ok(text) => tracing::debug!(metrics = %text, "Final metrics"),
        Err(e) => tracing::warn!(error = %e, "Failed to render metrics"),
    }

    Ok(())
}
