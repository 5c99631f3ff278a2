use std::time::Duration;

use crate::deadline::Deadline;
use crate::error::ProtocolError;

/// Путь единственного эндпоинта (метод POST)
pub const GET_PATH: &str = "/qotd/v1/get";

/// Заголовок с оставшимся бюджетом времени вызывающей стороны, в миллисекундах.
///
/// Передаётся относительное значение, а не абсолютное время,
/// чтобы часы клиента и сервера не обязаны были совпадать.
pub const TIMEOUT_HEADER: &str = "x-qotd-timeout-ms";

/// Значение заголовка [`TIMEOUT_HEADER`] для оставшегося бюджета
pub fn format_timeout(remaining: Duration) -> String {
    remaining.as_millis().to_string()
}

/// Парсит значение заголовка [`TIMEOUT_HEADER`] в дедлайн относительно "сейчас".
pub fn parse_timeout(value: &str) -> Result<Deadline, ProtocolError> {
    let invalid = || ProtocolError::InvalidTimeout(value.to_string());

    // только цифры: `u64::from_str` пропустил бы ведущий '+'
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let ms: u64 = digits.parse().map_err(|_| invalid())?;

    Ok(Deadline::after(Duration::from_millis(ms)))
}
