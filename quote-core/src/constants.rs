use std::time::Duration;

/// Дедлайн по умолчанию, если вызывающая сторона его не задала
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Максимальный размер тела запроса
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;
