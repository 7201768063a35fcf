use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::ApiError;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
}

/// Custom extractor for the chat body, `{"message": "<text>"}`
pub struct ChatRequestExtractor(pub ChatRequest);

#[async_trait]
impl<S> FromRequest<S> for ChatRequestExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                ApiError::bad_request(format!("Failed to parse JSON: {}", e))
            })?;

        if !value.is_object() {
            return Err(ApiError::bad_request(
                "Request body must be a JSON object",
            ));
        }

        let request: ChatRequest = serde_json::from_value(value).map_err(|e| {
            ApiError::bad_request(format!("Request body must carry a text 'message': {}", e))
        })?;

        Ok(ChatRequestExtractor(request))
    }
}
