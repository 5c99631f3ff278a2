//! # quote-core
//!
//! Базовые типы и протокол для QOTD-сервера ("quote of the day") и клиента.
//!
//! Этот крейт содержит:
//!
//! - [`types`] — запрос, ответ и доменная ошибка (`ErrorEnvelope`)
//! - [`wire`] — JSON-сериализация запросов и ответов
//! - [`protocol`] — HTTP-привязка: путь эндпоинта и заголовок с таймаутом
//! - [`deadline`] — дедлайны и подстановка таймаута по умолчанию
//! - [`seed`] — чтение seed-файла с цитатами для сервера
//! - [`authors`] — чтение списка авторов из текста/файла
//! - [`error`] — типы ошибок, которые возвращают компоненты `quote-core`
//!
//! ## Быстрый пример: разбор ответа сервера
//!
//! ```rust
//! use quote_core::wire::decode_response;
//! use quote_core::ErrorCode;
//!
//! let resp = decode_response(br#"{"quote":"","error":{"Code":"UnknownAuthor","Msg":"no"}}"#).unwrap();
//! match resp.into_result() {
//!     Ok(quote) => println!("{quote}"),
//!     Err(e) => assert_eq!(e.code, ErrorCode::UnknownAuthor),
//! }
//! ```
//!
//! ## Пример: дедлайн по умолчанию
//!
//! ```rust
//! use quote_core::{ensure_deadline, DEFAULT_TIMEOUT};
//!
//! let d = ensure_deadline(None);
//! assert!(d.remaining().unwrap() <= DEFAULT_TIMEOUT);
//! ```
//!
//! ## Дизайн
//!
//! `quote-core` задуман как “нулевая” зависимость для всех частей системы:
//! сервер, клиент, тесты. Поэтому здесь держим только:
//! чистые типы, парсинг/сериализацию и простую утилитарщину,
//! без runtime/async и без тяжёлых зависимостей.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// HTTP-привязка протокола (путь, заголовок таймаута).
pub mod protocol;

/// Чтение списка авторов из текста и файлов.
pub mod authors;

/// Чтение seed-файла с цитатами.
pub mod seed;

/// Доменные и wire-типы (запрос, ответ, код ошибки).
#[allow(missing_docs)]
pub mod types;

/// JSON-сериализация сообщений.
#[allow(missing_docs)]
pub mod wire;

/// Дедлайны.
#[allow(missing_docs)]
pub mod deadline;

/// Ошибки `quote-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{DEFAULT_TIMEOUT, MAX_REQUEST_BYTES};

// --- Re-exports (публичный фасад API) ---

pub use crate::deadline::{Deadline, ensure_deadline, ensure_deadline_or};
pub use crate::error::{ProtocolError, SeedFileError, WireError};
pub use crate::protocol::{GET_PATH, TIMEOUT_HEADER};
pub use crate::types::{ApplicationError, ErrorCode, ErrorEnvelope, GetRequest, GetResponse};
