use crate::store::QuoteStore;
use anyhow::Context;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

const DEFAULT_QUOTES: &str = include_str!("../assets/quotes.txt");

pub const HTTP_BIND_ADDR: &str = "0.0.0.0:8009";

pub const DEFAULT_TIMEOUT_MS: u64 = quote_core::DEFAULT_TIMEOUT.as_millis() as u64;

/// Настройки обработки запросов
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// дедлайн, если клиент не прислал свой
    pub default_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_timeout: quote_core::DEFAULT_TIMEOUT,
            max_body_bytes: quote_core::MAX_REQUEST_BYTES,
        }
    }
}

/// Загружает цитаты из файла или из встроенного набора
pub fn load_quote_store(path: Option<&Path>) -> anyhow::Result<QuoteStore> {
    let entries = match path {
        Some(p) => quote_core::seed::read_quotes_from_path(p)
            .with_context(|| format!("read quotes file {}", p.display()))?,
        None => quote_core::seed::read_quotes(Cursor::new(DEFAULT_QUOTES))
            .context("parse built-in quotes")?,
    };

    let store = QuoteStore::from_seed(entries).context("build quote store")?;
    Ok(store)
}
