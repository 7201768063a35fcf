pub mod config;
pub mod error;
pub mod response;
pub mod extractors;
pub mod handlers;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::utils::app_config::AppConfig;
use handlers::{chat::chat, health::health, index::index};

pub fn router(app_config: AppConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
