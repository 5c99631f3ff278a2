use thiserror::Error;

/// Ошибки HTTP-привязки протокола
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Значение заголовка с таймаутом не является целым числом миллисекунд
    #[error("invalid timeout header value: {0:?}")]
    InvalidTimeout(String),
}

/// Ошибки сериализации
#[derive(Debug, Error)]
pub enum WireError {
    /// Пустое тело сообщения
    #[error("empty body")]
    EmptyBody,

    /// Ошибка сериализации/десериализации
    #[error("json encode/decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ошибки чтения seed-файла с цитатами
#[derive(Debug, Error)]
pub enum SeedFileError {
    /// Ошибка ввода-вывода
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// В строке нет разделителя `|`
    #[error("line {line}: missing '|' between author and quote")]
    MissingSeparator {
        /// номер строки (с 1)
        line: usize,
    },

    /// Пустое имя автора
    #[error("line {line}: empty author")]
    EmptyAuthor {
        /// номер строки (с 1)
        line: usize,
    },

    /// Пустой текст цитаты
    #[error("line {line}: empty quote")]
    EmptyQuote {
        /// номер строки (с 1)
        line: usize,
    },
}
