use std::collections::HashMap;
use std::future::Future;

use log::warn;
use quote_core::{ApplicationError, Deadline};
use tokio::task::JoinSet;

use crate::client::QotdClient;
use crate::error::TransportError;

type CallResult = Result<Result<String, ApplicationError>, TransportError>;

/// Результат одного вызова, привязанный к запрошенному автору.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Запрошенный автор; пустая строка — любой
    pub author: String,
    pub result: CallResult,
}

/// Параллельно запрашивает цитаты для всех `authors`.
///
/// Возвращает управление только когда завершились все вызовы (успехом или
/// ошибкой). На каждого автора ровно один [`FetchOutcome`], даже если задача
/// вызова упала. Порядок результатов — порядок завершения.
pub async fn fetch_all<I>(
    client: &QotdClient,
    authors: I,
    deadline: Option<Deadline>,
) -> Vec<FetchOutcome>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    run_all(authors, |author| {
        let client = client.clone();
        async move { client.get(deadline, &author).await }
    })
    .await
}

async fn run_all<I, F, Fut>(authors: I, call: F) -> Vec<FetchOutcome>
where
    I: IntoIterator,
    I::Item: Into<String>,
    F: Fn(String) -> Fut,
    Fut: Future<Output = CallResult> + Send + 'static,
{
    let mut join_set = JoinSet::new();
    let mut pending = HashMap::new();

    for author in authors {
        let author: String = author.into();
        let id = join_set.spawn(call(author.clone())).id();
        pending.insert(id, author);
    }

    let mut sink = Vec::with_capacity(pending.len());

    while let Some(joined) = join_set.join_next_with_id().await {
        let (id, result) = match joined {
            Ok((id, result)) => (id, result),
            Err(e) => {
                let id = e.id();
                warn!("fetch task failed: {e}");
                (id, Err(TransportError::TaskFailed(e.to_string())))
            }
        };

        // id выдан нашим spawn, автор всегда найдётся
        if let Some(author) = pending.remove(&id) {
            sink.push(FetchOutcome { author, result });
        }
    }

    sink
}
