//! # quote-client
//!
//! Клиент QOTD-сервера: одиночные вызовы `POST /qotd/v1/get` с дедлайном.
//!
//! Ошибки разделены на два класса:
//!
//! - [`TransportError`] — сеть, не-2xx статус, дедлайн, нечитаемое тело;
//! - [`quote_core::ApplicationError`] — доменная ошибка (`UnknownAuthor`)
//!   внутри успешно доставленного ответа.
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), quote_client::TransportError> {
//! use quote_client::QotdClient;
//!
//! let client = QotdClient::new("http://127.0.0.1:8009")?;
//! match client.get(None, "Mark Twain").await? {
//!     Ok(quote) => println!("{quote}"),
//!     Err(e) => println!("server says: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod fanout;

pub use client::QotdClient;
pub use error::{GetError, TransportError};
pub use fanout::{FetchOutcome, fetch_all};
