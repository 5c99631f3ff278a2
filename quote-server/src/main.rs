//! Точка входа `quote-server`.
//!
//! Жизненный цикл:
//! - парсинг CLI и загрузка цитат
//! - bind HTTP listener
//! - обслуживание запросов до `Ctrl+C`, затем дожидаемся запросов в обработке

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;
use quote_server::{AppState, load_quote_store};
use tokio::net::TcpListener;
use tokio::sync::Notify;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();

    let store = load_quote_store(args.quotes_file.as_deref())?;
    info!(
        "loaded quotes: {}",
        store.authors().collect::<Vec<_>>().join(", ")
    );

    let shutdown = Arc::new(Notify::new());

    // Ctrl+C => будим graceful shutdown
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("shutting down...");
            shutdown.notify_one();
        })?;
    }

    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("bind HTTP listener {}", args.bind))?;

    let state = AppState::new(store, args.server_config());
    quote_server::serve(listener, state, async move { shutdown.notified().await }).await?;

    Ok(())
}
