use std::time::Duration;

use log::debug;
use quote_core::protocol::format_timeout;
use quote_core::{
    ApplicationError, DEFAULT_TIMEOUT, Deadline, GET_PATH, GetRequest, GetResponse,
    TIMEOUT_HEADER, ensure_deadline_or, wire,
};
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use crate::error::{GetError, TransportError};

/// Клиент QOTD-сервера.
///
/// Не хранит состояния между вызовами: клон дешёвый (внутри `reqwest::Client`
/// на `Arc`), один экземпляр можно использовать из многих задач одновременно.
#[derive(Debug, Clone)]
pub struct QotdClient {
    endpoint: Url,
    http: reqwest::Client,
    default_timeout: Duration,
}

impl QotdClient {
    /// `addr` — базовый адрес сервера, например `http://127.0.0.1:8009`.
    /// Поддерживается только схема `http`.
    pub fn new(addr: &str) -> Result<Self, TransportError> {
        let invalid = |reason: String| TransportError::InvalidAddress {
            addr: addr.to_string(),
            reason,
        };

        let base = Url::parse(addr).map_err(|e| invalid(e.to_string()))?;
        // TLS не собран, поэтому только http
        if base.scheme() != "http" {
            return Err(invalid(format!("unsupported scheme {:?}", base.scheme())));
        }
        let endpoint = base.join(GET_PATH).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            endpoint,
            http: reqwest::Client::new(),
            default_timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Таймаут для вызовов без явного дедлайна (по умолчанию 2 с)
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Запрашивает цитату. Пустой `author` — любой автор.
    ///
    /// Внешний `Result` — транспорт, внутренний — доменная ошибка из тела ответа.
    /// Если дедлайн уже истёк, сервер не вызывается.
    pub async fn get(
        &self,
        deadline: Option<Deadline>,
        author: &str,
    ) -> Result<Result<String, ApplicationError>, TransportError> {
        let deadline = ensure_deadline_or(deadline, self.default_timeout);
        let Some(remaining) = deadline.remaining() else {
            return Err(TransportError::DeadlineExceeded);
        };

        let body = wire::encode_request(&GetRequest::new(author))?;
        debug!("get author={author:?} budget={remaining:?}");

        let resp = tokio::time::timeout_at(deadline.instant().into(), self.round_trip(body, remaining))
            .await
            .map_err(|_| TransportError::DeadlineExceeded)??;

        Ok(resp.into_result())
    }

    /// То же, что [`QotdClient::get`], но с одной плоской ошибкой.
    pub async fn get_quote(
        &self,
        deadline: Option<Deadline>,
        author: &str,
    ) -> Result<String, GetError> {
        Ok(self.get(deadline, author).await??)
    }

    async fn round_trip(
        &self,
        body: Vec<u8>,
        remaining: Duration,
    ) -> Result<GetResponse, TransportError> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, wire::CONTENT_TYPE_JSON)
            .header(TIMEOUT_HEADER, format_timeout(remaining))
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).trim().to_string(),
            });
        }

        Ok(wire::decode_response(&bytes)?)
    }
}
