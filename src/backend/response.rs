use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Envelope shared by every endpoint. `status == "Success"` signals a
/// successful operation; any other string is a human-readable failure
/// category. Failures still serialize as a well-formed envelope with
/// `content: null`, never as a raw error.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub content: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn success<T: Serialize>(content: T) -> Self {
        match serde_json::to_value(content) {
            Ok(value) => Self {
                status: "Success".to_string(),
                content: Some(value),
            },
            Err(err) => {
                tracing::error!("Response|serialize: {err}");
                Self::failure("Server error")
            }
        }
    }

    pub fn failure(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            content: None,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
