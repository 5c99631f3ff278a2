use crate::config::ServerConfig;
use crate::store::QuoteStore;
use axum::body::{Body, to_bytes};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::{debug, warn};
use quote_core::protocol::parse_timeout;
use quote_core::{
    Deadline, ErrorEnvelope, GetRequest, GetResponse, ProtocolError, TIMEOUT_HEADER,
    ensure_deadline_or, wire,
};
use rand::Rng;
use std::fmt::Display;
use std::sync::Arc;

/// Общее состояние обработчиков. Хранилище только читается.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<QuoteStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: QuoteStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Выбор цитаты для запроса.
///
/// Неизвестный автор — доменная ошибка внутри ответа, а не ошибка транспорта.
pub fn resolve_quote<R: Rng + ?Sized>(
    store: &QuoteStore,
    req: &GetRequest,
    rng: &mut R,
) -> GetResponse {
    let author = if req.is_any_author() {
        store.pick_random_author(rng)
    } else {
        match store.lookup(&req.author) {
            Some(a) => a,
            None => return GetResponse::failure(ErrorEnvelope::unknown_author(&req.author)),
        }
    };

    GetResponse::quote(author.pick_random_quote(rng))
}

/// `POST /qotd/v1/get`
pub async fn get_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    // дедлайн выставляем до чтения тела: чтение тоже должно быть ограничено
    let deadline = match inbound_deadline(&headers) {
        Ok(d) => ensure_deadline_or(d, state.config.default_timeout),
        Err(e) => return bad_request(e),
    };

    let read = to_bytes(body, state.config.max_body_bytes);
    let bytes = match tokio::time::timeout_at(deadline.instant().into(), read).await {
        Ok(Ok(b)) => b,
        Ok(Err(e)) => return bad_request(e),
        Err(_) => return abandoned("reading body"),
    };

    let req = match wire::decode_request(&bytes) {
        Ok(r) => r,
        Err(e) => return bad_request(e),
    };

    let resp = resolve_quote(&state.store, &req, &mut rand::rng());
    debug!(
        "author={:?} -> {}",
        req.author,
        match &resp.error {
            Some(e) => e.to_string(),
            None => "ok".to_string(),
        }
    );

    // клиент уже считает вызов проваленным, отвечать ему нечем
    if deadline.is_expired() {
        return abandoned("resolving quote");
    }

    match wire::encode_response(&resp) {
        Ok(b) => ([(header::CONTENT_TYPE, wire::CONTENT_TYPE_JSON)], b).into_response(),
        Err(e) => {
            warn!("failed to encode response: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn inbound_deadline(headers: &HeaderMap) -> Result<Option<Deadline>, ProtocolError> {
    let Some(value) = headers.get(TIMEOUT_HEADER) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| ProtocolError::InvalidTimeout(String::from_utf8_lossy(value.as_bytes()).into_owned()))?;

    parse_timeout(value).map(Some)
}

fn bad_request(e: impl Display) -> Response {
    warn!("bad request: {e}");
    (StatusCode::BAD_REQUEST, e.to_string()).into_response()
}

fn abandoned(stage: &str) -> Response {
    warn!("deadline exceeded while {stage}; dropping response");
    StatusCode::GATEWAY_TIMEOUT.into_response()
}
