use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

/// Quote Client - запрашивает цитаты дня у quote-server.
///
/// Все вызовы выполняются параллельно, у каждого свой дедлайн.
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-client", version, about)]
pub(crate) struct Args {
    /// Базовый адрес quote-server, например http://127.0.0.1:8009
    #[arg(long, default_value = "http://127.0.0.1:8009")]
    pub(crate) server: String,

    /// Автор (можно несколько раз): --author "Mark Twain" --author "Eleanor Roosevelt"
    #[arg(long = "author")]
    pub(crate) authors: Vec<String>,

    /// Файл авторов (по одному на строку, # комментарии)
    #[arg(long)]
    pub(crate) authors_file: Option<PathBuf>,

    /// Дополнительно N запросов без автора (случайный автор)
    #[arg(long, default_value_t = 0)]
    pub(crate) random: usize,

    /// Дедлайн каждого вызова в мс (по умолчанию 2000)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) timeout_ms: Option<u64>,
}

impl Args {
    /// Валидация аргументов (файл существует, есть хотя бы один запрос и т.д.)
    pub(crate) fn validate(&self) -> Result<()> {
        if self.server.trim().is_empty() {
            bail!("--server is empty");
        }

        if let Some(path) = &self.authors_file {
            let md = std::fs::metadata(path)
                .with_context(|| format!("authors file not found: {:?}", path))?;
            if !md.is_file() {
                bail!("--authors-file must point to a file: {:?}", path);
            }
        }

        if self.authors.iter().any(|a| a.trim().is_empty()) {
            bail!("--author must not be empty; use --random for any author");
        }

        if self.authors.is_empty() && self.authors_file.is_none() && self.random == 0 {
            bail!("nothing to fetch: pass --author, --authors-file or --random");
        }

        Ok(())
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
