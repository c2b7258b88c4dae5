use axum::http::StatusCode;
use thiserror::Error;

/// Why a load of the weeks resource failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load {resource} (HTTP {status}).")]
    Transport { resource: String, status: u16 },

    #[error("request for weeks failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("could not read weeks file: {0}")]
    Io(#[from] std::io::Error),

    #[error("weeks data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{resource} has no weeks array.")]
    Shape { resource: String },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(err.to_string())
        } else {
            Self::internal(err)
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
