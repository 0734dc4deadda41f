use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::domain::{AccountError, LedgerError};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error("Invalid account ID: {0}")]
    InvalidPath(#[from] PathRejection),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Ledger(LedgerError::AccountNotFound(_))
            | ApiError::Ledger(LedgerError::TransactionsNotFound(_)) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            ApiError::Ledger(LedgerError::InvalidKind(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_kind")
            }
            ApiError::Ledger(LedgerError::Account(AccountError::InsufficientFunds { .. })) => {
                (StatusCode::BAD_REQUEST, "insufficient_funds")
            }
            ApiError::Ledger(LedgerError::Account(AccountError::BalanceOverflow { .. })) => {
                (StatusCode::BAD_REQUEST, "balance_overflow")
            }
            ApiError::Ledger(LedgerError::InvalidAccount { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_account")
            }
            ApiError::Ledger(LedgerError::Validation(_))
            | ApiError::InvalidBody(_)
            | ApiError::InvalidPath(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();
        warn!(status = status.as_u16(), code, "Request rejected: {message}");

        (
            status,
            Json(json!({
                "error": code,
                "message": message,
            })),
        )
            .into_response()
    }
}
