//! Точка входа `quote-client`.
//!
//! Жизненный цикл:
//! - парсинг CLI и сборка списка авторов
//! - параллельные вызовы `POST /qotd/v1/get`, по одному на автора
//! - ожидание всех вызовов и печать результатов
//! - ненулевой код выхода, если хоть один вызов упал на транспорте

mod authors;
mod cli;

use clap::Parser;
use log::{info, warn};
use quote_client::{FetchOutcome, QotdClient, fetch_all};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let requests = authors::load_requests(&args)?;

    let mut client = QotdClient::new(&args.server)?;
    if let Some(t) = args.timeout() {
        client = client.with_default_timeout(t);
    }

    info!(
        "Starting quote-client: endpoint={}, calls={}",
        client.endpoint(),
        requests.len()
    );

    let total = requests.len();
    let outcomes = fetch_all(&client, requests, None).await;

    if outcomes.len() != total {
        anyhow::bail!("got {} results for {total} calls", outcomes.len());
    }

    let failed = outcomes.iter().filter(|o| !print_outcome(o)).count();

    if failed > 0 {
        anyhow::bail!("{failed} of {total} calls failed");
    }

    Ok(())
}

/// Печатает результат; `false` — ошибка транспорта.
fn print_outcome(o: &FetchOutcome) -> bool {
    let who = if o.author.is_empty() {
        "<any>"
    } else {
        o.author.as_str()
    };

    match &o.result {
        Ok(Ok(quote)) => {
            println!("{who}: {quote}");
            true
        }
        Ok(Err(app)) => {
            println!("{who}: error {app}");
            true
        }
        Err(e) => {
            warn!("call for {who} failed: {e}");
            eprintln!("{who}: transport error: {e}");
            false
        }
    }
}
