use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Запрос цитаты дня.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRequest {
    /// Автор. Пустая строка — "любой автор".
    #[serde(default)]
    pub author: String,
}

impl GetRequest {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }

    /// `true`, если клиент не выбрал автора
    pub fn is_any_author(&self) -> bool {
        self.author.is_empty()
    }
}

/// Ответ сервера.
///
/// Осмысленно заполнено ровно одно из полей: `quote` (успех) или `error`
/// (доменная ошибка). Ошибки транспорта сюда не попадают.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    #[serde(default)]
    pub quote: String,

    #[serde(default)]
    pub error: Option<ErrorEnvelope>,
}

impl GetResponse {
    pub fn quote(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            error: None,
        }
    }

    pub fn failure(error: ErrorEnvelope) -> Self {
        Self {
            quote: String::new(),
            error: Some(error),
        }
    }

    /// Разделяет ответ на цитату и доменную ошибку.
    pub fn into_result(self) -> Result<String, ErrorEnvelope> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.quote),
        }
    }
}

/// Код доменной ошибки. На проводе — строка, пустая для `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// Код не задан или не распознан
    #[default]
    Unknown,
    /// Запрошенного автора нет в хранилище
    UnknownAuthor,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unknown => "",
            ErrorCode::UnknownAuthor => "UnknownAuthor",
        }
    }
}

impl From<String> for ErrorCode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "UnknownAuthor" => ErrorCode::UnknownAuthor,
            _ => ErrorCode::Unknown,
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Доменная ошибка, которую сервер кладёт в тело успешного ответа.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("(code {code}): {msg}")]
pub struct ErrorEnvelope {
    #[serde(rename = "Code", default)]
    pub code: ErrorCode,

    #[serde(rename = "Msg", default)]
    pub msg: String,
}

impl ErrorEnvelope {
    pub fn unknown_author(author: &str) -> Self {
        Self {
            code: ErrorCode::UnknownAuthor,
            msg: format!("Author {author:?} was not found"),
        }
    }
}

/// Ошибка прикладного уровня на стороне клиента
pub type ApplicationError = ErrorEnvelope;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_author_message_quotes_the_name() {
        let e = ErrorEnvelope::unknown_author("Nobody");
        assert_eq!(e.code, ErrorCode::UnknownAuthor);
        assert_eq!(e.msg, "Author \"Nobody\" was not found");
        assert_eq!(
            e.to_string(),
            "(code UnknownAuthor): Author \"Nobody\" was not found"
        );
    }

    #[test]
    fn error_code_maps_unrecognized_values_to_unknown() {
        assert_eq!(ErrorCode::from("UnknownAuthor".to_string()), ErrorCode::UnknownAuthor);
        assert_eq!(ErrorCode::from(String::new()), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from("Throttled".to_string()), ErrorCode::Unknown);
    }

    #[test]
    fn into_result_splits_quote_and_error() {
        assert_eq!(GetResponse::quote("Q4").into_result(), Ok("Q4".to_string()));

        let env = ErrorEnvelope::unknown_author("Nobody");
        assert_eq!(GetResponse::failure(env.clone()).into_result(), Err(env));
    }

    #[test]
    fn empty_request_means_any_author() {
        assert!(GetRequest::default().is_any_author());
        assert!(!GetRequest::new("Mark Twain").is_any_author());
    }
}
