//! HTTP surface of the recipe service.

mod health;
mod recipe;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::providers::LlmProvider;

pub struct InnerAppState {
    pub provider: Arc<dyn LlmProvider>,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(provider: Arc<dyn LlmProvider>) -> Router {
    let state: AppState = Arc::new(InnerAppState { provider });

    // The browser frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(recipe::routes())
        .merge(health::routes())
        .layer(cors)
        .with_state(state)
}

pub async fn serve(listener: TcpListener, provider: Arc<dyn LlmProvider>) -> std::io::Result<()> {
    let app = build_router(provider);
    axum::serve(listener, app).await
}
