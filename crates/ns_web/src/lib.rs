use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/news/top", get(handlers::top_news))
        .route("/summarize", post(handlers::summarize))
        .route("/digest/:date", get(handlers::digest))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves the API until the task is cancelled.
pub async fn serve(addr: &str, state: AppState) -> ns_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "🚀 API listening");
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use ns_core::{Error, Result};
    pub use crate::{create_app, serve, AppState};
}
