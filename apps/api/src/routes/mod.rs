pub mod health;
pub mod hello;

use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Cannot {method} {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Wrong method on a known path is a 404 too, not axum's bare 405
        .route("/health", get(health::health_handler).fallback(not_found))
        .route("/hello", get(hello::hello_handler).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}
