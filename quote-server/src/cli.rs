use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use quote_server::config;

/// Quote Server - отдаёт цитату дня по HTTP: `POST /qotd/v1/get`.
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-server", version, about)]
pub(crate) struct Args {
    /// HTTP bind address, например 0.0.0.0:8009
    #[arg(long, default_value = config::HTTP_BIND_ADDR)]
    pub(crate) bind: SocketAddr,

    /// Файл цитат: строки вида "Автор | цитата", поддержка # комментариев.
    /// Без флага используется встроенный набор.
    #[arg(long)]
    pub(crate) quotes_file: Option<PathBuf>,

    /// Дедлайн запроса (мс), если клиент не прислал свой
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) timeout_ms: u64,
}

impl Args {
    pub(crate) fn server_config(&self) -> config::ServerConfig {
        config::ServerConfig {
            default_timeout: Duration::from_millis(self.timeout_ms),
            ..Default::default()
        }
    }
}
