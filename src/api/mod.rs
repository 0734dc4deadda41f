//! HTTP adapter over the [`Ledger`](crate::domain::Ledger).
//!
//! Handlers only decode requests, call into the ledger and encode whatever it
//! returns. No ledger rule lives here.

mod dto;
mod errors;
mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::domain::Ledger;

pub use dto::{CreateAccountRequest, CreateTransactionRequest, TransferRequest, TransferResponse};
pub use errors::ApiError;

pub fn build_app(ledger: Arc<Ledger>) -> Router {
    Router::new()
        .route(
            "/accounts",
            post(routes::create_account).get(routes::list_accounts),
        )
        .route("/accounts/:id", get(routes::get_account))
        .route(
            "/accounts/:id/transactions",
            post(routes::create_transaction).get(routes::list_transactions),
        )
        .route("/transfer", post(routes::transfer_funds))
        .with_state(ledger)
}
