//! # quote-server
//!
//! HTTP-сервер цитаты дня. Хранилище цитат ([`store::QuoteStore`]) собирается
//! один раз при старте, дальше обработчики только читают его.
//!
//! Поток запроса: чтение тела (с дедлайном) -> декодирование -> выбор автора
//! -> выбор цитаты -> JSON-ответ. Неизвестный автор — это `200` с
//! `ErrorEnvelope` внутри, нечитаемое тело — `400`.

pub mod config;
pub mod handler;
pub mod http;
pub mod store;

pub use config::{ServerConfig, load_quote_store};
pub use handler::AppState;
pub use http::{router, serve};
pub use store::{QuoteStore, StoreError};
