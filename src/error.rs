use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("record not found")]
    NotFound,

    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("operation exceeded its deadline")]
    Timeout,

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::NotFound => (StatusCode::NOT_FOUND, "record not found".to_string()),
            Error::EditConflict => (
                StatusCode::CONFLICT,
                "unable to update the record due to an edit conflict, please try again"
                    .to_string(),
            ),
            Error::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            Error::Timeout => {
                tracing::error!("store operation exceeded its deadline");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "the server encountered a problem and could not process your request"
                        .to_string(),
                )
            }
            Error::Database(err) => {
                tracing::error!(error = %err, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "the server encountered a problem and could not process your request"
                        .to_string(),
                )
            }
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound,
            other => Error::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_expected_outcomes_to_client_statuses() {
        assert_eq!(
            Error::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::EditConflict.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn masks_store_failures_as_internal_errors() {
        assert_eq!(
            Error::Timeout.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Database(sqlx::Error::PoolClosed)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_becomes_not_found() {
        assert!(matches!(
            Error::from(sqlx::Error::RowNotFound),
            Error::NotFound
        ));
        assert!(matches!(
            Error::from(sqlx::Error::PoolClosed),
            Error::Database(_)
        ));
    }
}
