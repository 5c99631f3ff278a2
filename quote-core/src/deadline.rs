use std::time::{Duration, Instant};

use crate::constants::DEFAULT_TIMEOUT;

/// Абсолютный момент времени, после которого операция должна быть брошена.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Instant);

impl Deadline {
    /// Дедлайн через `timeout` от текущего момента
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    pub fn instant(&self) -> Instant {
        self.0
    }

    /// Оставшееся время; `None`, если дедлайн уже прошёл.
    pub fn remaining(&self) -> Option<Duration> {
        self.0
            .checked_duration_since(Instant::now())
            .filter(|d| !d.is_zero())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_none()
    }
}

/// Возвращает переданный дедлайн или дедлайн через [`DEFAULT_TIMEOUT`].
///
/// Единая точка подстановки таймаута по умолчанию для клиента и сервера.
pub fn ensure_deadline(deadline: Option<Deadline>) -> Deadline {
    ensure_deadline_or(deadline, DEFAULT_TIMEOUT)
}

/// То же, что [`ensure_deadline`], но с явным таймаутом по умолчанию.
pub fn ensure_deadline_or(deadline: Option<Deadline>, default_timeout: Duration) -> Deadline {
    deadline.unwrap_or_else(|| Deadline::after(default_timeout))
}
