use quote_core::{ApplicationError, ErrorCode, WireError};
use reqwest::StatusCode;
use thiserror::Error;

/// Сбой доставки или декодирования: до доменной логики дело не дошло.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Адрес сервера не является http URL
    #[error("invalid server address {addr:?}: {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// Дедлайн истёк до или во время вызова
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// Сетевая ошибка
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Сервер ответил не 2xx
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Тело ответа не разбирается
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Задача вызова упала (паника или отмена) до получения ответа
    #[error("call task failed: {0}")]
    TaskFailed(String),
}

impl TransportError {
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, TransportError::DeadlineExceeded)
    }
}

/// Плоская ошибка вызова, для тех, кому удобнее один `?`.
#[derive(Debug, Error)]
pub enum GetError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("application error: {0}")]
    Application(#[from] ApplicationError),
}

impl GetError {
    /// Код доменной ошибки; `None` для ошибок транспорта.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            GetError::Application(e) => Some(e.code),
            GetError::Transport(_) => None,
        }
    }
}
