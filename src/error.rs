use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Failure envelope shared by every data endpoint.
///
/// Database errors keep the driver's text and hand it to the caller unchanged in
/// the `error` field next to a fixed per-resource `message`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{message}: {detail}")]
    MalformedBody {
        message: &'static str,
        detail: String,
    },

    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Adapter for `map_err` that tags a store error with the resource's message.
    pub fn internal(message: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |e| Self::Internal {
            message,
            detail: e.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody {
            message: "Invalid request body",
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(message) => {
                warn!(reason = %message, "rejected request");
                json!({ "success": false, "message": message })
            }
            Self::NotFound(message) => json!({ "success": false, "message": message }),
            Self::MalformedBody { message, detail } => {
                warn!(%detail, "malformed body");
                json!({ "success": false, "message": message, "error": detail })
            }
            Self::Internal { message, detail } => {
                error!(error = %detail, "{message}");
                json!({ "success": false, "message": message, "error": detail })
            }
        };
        (status, Json(body)).into_response()
    }
}
