use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

impl From<sqlx::Error> for AdminError {
    fn from(err: sqlx::Error) -> Self {
        Self::DatabaseError(format!("Database error: {}", err))
    }
}

impl From<image::ImageError> for AdminError {
    fn from(err: image::ImageError) -> Self {
        Self::InvalidImage(err.to_string())
    }
}

impl From<FormRejection> for AdminError {
    fn from(rejection: FormRejection) -> Self {
        Self::ValidationError(rejection.body_text())
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        Self::BackupError(format!("I/O error: {}", err))
    }
}

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Backup error: {0}")]
    BackupError(String),

    #[error("Backup unavailable: {0}")]
    BackupUnavailable(String),
}

impl AdminError {
    pub fn missing_fields() -> Self {
        Self::ValidationError("Please fill all fields.".to_string())
    }

    pub fn out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        Self::ValidationError(format!(
            "{} must be between {} and {} (got {})",
            field, min, max, value
        ))
    }

    pub fn unknown_value(kind: &str, value: &str) -> Self {
        Self::DatabaseError(format!("Unknown {} stored: {}", kind, value))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::InvalidImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BackupUnavailable(_) => StatusCode::NOT_FOUND,
            Self::ConfigError(_) | Self::DatabaseError(_) | Self::BackupError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
