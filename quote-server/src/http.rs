use crate::handler::{self, AppState};
use axum::Router;
use axum::routing::post;
use log::info;
use quote_core::GET_PATH;
use std::future::Future;
use tokio::net::TcpListener;

/// Маршруты сервиса. Чужие пути -> 404, другие методы -> 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(GET_PATH, post(handler::get_quote))
        .with_state(state)
}

/// Обслуживает соединения до срабатывания `shutdown`, затем дожидается
/// завершения запросов в обработке.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        "quote-server listening on http://{addr}{GET_PATH} ({} authors)",
        state.store.len()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("quote-server stopped");
    Ok(())
}
