use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Rejection raised by the model when a field value breaks an entity invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No description provided")]
    MissingDescription,

    #[error("Description must be at least {min} characters (got {actual})")]
    DescriptionTooShort { min: usize, actual: usize },

    #[error("Description must be a string")]
    DescriptionNotText,

    #[error("Strength must be one of Strong, Weak, Average (got {0})")]
    InvalidStrength(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Path resource missing. Body: `{"error": msg}`.
    #[error("{0}")]
    NotFound(String),

    /// Referenced id in a request body does not resolve. Body: `{"errors": [msg]}`.
    #[error("{0}")]
    Unresolved(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::Unresolved(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Migrate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            AppError::NotFound(msg) => json!({ "error": msg }),
            AppError::Unresolved(msg) | AppError::BadRequest(msg) => json!({ "errors": [msg] }),
            // Clients get the generic message; the specific rule goes to the log.
            AppError::Validation(_) => json!({ "errors": ["validation errors"] }),
            AppError::Database(_) | AppError::Migrate(_) => {
                json!({ "error": "internal server error" })
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Database(_) | AppError::Migrate(_) => error!(error = %self, "Storage failure"),
            _ => debug!(status = status.as_u16(), error = %self, "Request rejected"),
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_singular_error_key() {
        let err = AppError::NotFound("Hero not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.body(), json!({ "error": "Hero not found" }));
    }

    #[test]
    fn unresolved_reference_is_404_with_errors_list() {
        let err = AppError::Unresolved("Power or Hero not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.body(), json!({ "errors": ["Power or Hero not found"] }));
    }

    #[test]
    fn validation_hides_rule_detail() {
        let err: AppError = ValidationError::InvalidStrength("Invincible".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), json!({ "errors": ["validation errors"] }));
    }

    #[test]
    fn database_errors_are_opaque_500s() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body(), json!({ "error": "internal server error" }));
    }

    #[test]
    fn short_description_message_reports_lengths() {
        let err = ValidationError::DescriptionTooShort { min: 20, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Description must be at least 20 characters (got 5)"
        );
    }
}
