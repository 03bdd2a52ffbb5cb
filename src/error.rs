use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0} is required")]
    MissingField(&'static str),

    #[error("validation error: vatin must contain exactly 11 digits")]
    InvalidVatinFormat,

    #[error("validation error: {0} must contain only letters")]
    InvalidNameFormat(&'static str),

    #[error("maximum number of tickets already issued for this vatin")]
    QuotaExceeded,

    #[error("ticket not exist")]
    TicketNotExist,

    #[error("no ticket code published")]
    NoCodePublished,

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let (status, message) = match &self {
            Error::MissingField(_) | Error::InvalidVatinFormat | Error::InvalidNameFormat(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Error::QuotaExceeded => (StatusCode::CONFLICT, self.to_string()),
            Error::TicketNotExist | Error::NoCodePublished => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            // operational faults must not leak internal detail
            Error::Database(_) | Error::Unexpected(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server error".to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
