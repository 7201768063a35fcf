use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::{error::ApiError, extractors::ChatRequestExtractor},
    chat::respond,
    utils::app_config::AppConfig,
};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /chat - runs one command through the interpreter
///
/// Expected JSON structure:
/// { "message": "add expense 12.5 lunch" }
///
/// User mistakes (bad amount, missing category) still answer 200 with the
/// explanation in `response`. Only store failures become errors.
pub async fn chat(
    State(app_config): State<AppConfig>,
    ChatRequestExtractor(payload): ChatRequestExtractor,
) -> Result<Json<ChatResponse>, ApiError> {
    tracing::debug!(message = %payload.message, "chat message received");

    let response = respond(&payload.message, &app_config).await?;

    Ok(Json(ChatResponse { response }))
}
