use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request did not match the declared schema.
    #[error("{message}")]
    Unprocessable {
        message: String,
        fields: Vec<String>,
    },

    #[error("{0}")]
    PayloadTooLarge(String),
}

impl AppError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        AppError::Unprocessable {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn missing_fields(fields: Vec<String>) -> Self {
        AppError::Unprocessable {
            message: format!("Missing required field(s): {}", fields.join(", ")),
            fields,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, fields) = match self {
            AppError::Unprocessable { message, fields } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, fields)
            }
            AppError::PayloadTooLarge(message) => {
                (StatusCode::PAYLOAD_TOO_LARGE, message, Vec::new())
            }
        };

        tracing::debug!(status = status.as_u16(), ?fields, "Rejected request: {error}");

        let body = axum::Json(ErrorResponse {
            error,
            status: status.as_u16(),
            fields,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let fields = missing_field_name(&message).into_iter().collect();
        AppError::Unprocessable { message, fields }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::unprocessable(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::unprocessable(format!("Invalid multipart data: {}", err.body_text()))
        }
    }
}

/// Pulls `x` out of serde's "missing field `x`" wording.
fn missing_field_name(message: &str) -> Option<String> {
    let rest = message.split("missing field `").nth(1)?;
    let name = rest.split('`').next()?;
    (!name.is_empty()).then(|| name.to_string())
}
