//! Error handling - every failure rendered inside the `{data, message}` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::{Value, json};
use validator::ValidationErrors;

use scribe_core::DomainError;
use scribe_core::ports::AuthError;
use scribe_shared::ApiResponse;

/// Application-level error type that converts to enveloped responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Field name to list of messages.
    #[error("Validation errors: {0}")]
    Validation(Value),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not implemented")]
    NotImplemented,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            // Unexpected failures stay a generic client error.
            AppError::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => ApiResponse::new(errors.clone(), "Invalid Data"),
            AppError::BadRequest(detail) => {
                ApiResponse::new(json!({ "detail": detail }), "Invalid Data")
            }
            AppError::InvalidCredentials => ApiResponse::message_only("Invalid Credentials"),
            AppError::Unauthorized(msg) | AppError::Forbidden(msg) | AppError::NotFound(msg) => {
                ApiResponse::message_only(msg.clone())
            }
            AppError::NotImplemented => ApiResponse::message_only("Not implemented"),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ApiResponse::message_only("Something went wrong")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound {
                entity_type: "user",
                ..
            } => AppError::NotFound("User Account Not Found".to_string()),
            DomainError::NotFound {
                entity_type: "comment",
                ..
            } => AppError::NotFound("Comment not found or not authorized to delete".to_string()),
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("Invalid {} uid", entity_type))
            }
            DomainError::Forbidden {
                entity_type,
                action,
            } => AppError::Forbidden(format!(
                "You are not allowed to {} this {}",
                action, entity_type
            )),
            DomainError::Validation { field, message } => {
                AppError::Validation(json!({ field: [message] }))
            }
            DomainError::Duplicate(msg) => {
                AppError::Validation(json!({ "non_field_errors": [msg] }))
            }
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::Unauthenticated(err) => AppError::from(err),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingAuth => {
                AppError::Unauthorized("Authentication credentials were not provided.".to_string())
            }
            AuthError::TokenExpired => AppError::Unauthorized("Token has expired".to_string()),
            AuthError::HashingError(msg) => AppError::Internal(msg),
            other => {
                tracing::debug!("Rejected token: {}", other);
                AppError::Unauthorized("Given token not valid for any token type".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::Validation(Value::Object(fields))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_domain_errors_map_to_statuses() {
        let cases = [
            (
                DomainError::not_found("blog", Uuid::nil()),
                StatusCode::NOT_FOUND,
            ),
            (
                DomainError::Forbidden {
                    entity_type: "blog",
                    action: "edit",
                },
                StatusCode::FORBIDDEN,
            ),
            (
                DomainError::validation("title", "too long"),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Duplicate("Username already exists".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Unauthenticated(AuthError::TokenExpired),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Internal("db down".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_forbidden_message_names_action_and_entity() {
        let err = AppError::from(DomainError::Forbidden {
            entity_type: "blog",
            action: "delete",
        });

        assert!(
            matches!(err, AppError::Forbidden(ref msg) if msg == "You are not allowed to delete this blog")
        );
    }

    #[test]
    fn test_token_failures_do_not_leak_decoder_detail() {
        let err = AppError::from(DomainError::Unauthenticated(AuthError::InvalidToken(
            "InvalidSignature".into(),
        )));

        assert!(
            matches!(err, AppError::Unauthorized(ref msg) if msg == "Given token not valid for any token type")
        );
    }
}
