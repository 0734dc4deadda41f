use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{CreateAccountRequest, CreateTransactionRequest, TransferRequest, TransferResponse};
use super::ApiError;
use crate::domain::{Account, AccountId, Ledger, Transaction, TransactionKind};

type LedgerState = State<Arc<Ledger>>;

pub async fn create_account(
    State(ledger): LedgerState,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let Json(request) = body?;
    let account = ledger.open_account(request.owner, request.initial_balance)?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn get_account(
    State(ledger): LedgerState,
    id: Result<Path<AccountId>, PathRejection>,
) -> Result<Json<Account>, ApiError> {
    let Path(id) = id?;
    Ok(Json(ledger.get_account(id)?))
}

pub async fn list_accounts(State(ledger): LedgerState) -> Json<Vec<Account>> {
    Json(ledger.list_accounts())
}

pub async fn create_transaction(
    State(ledger): LedgerState,
    id: Result<Path<AccountId>, PathRejection>,
    body: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let Path(id) = id?;
    // Separate read so an unknown account is reported before a malformed body.
    // `record_transaction` checks the account again under its write-lock.
    ledger.get_account(id)?;
    let Json(request) = body?;

    let kind = request.kind.parse::<TransactionKind>()?;
    let transaction = ledger.record_transaction(id, kind, request.amount)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn list_transactions(
    State(ledger): LedgerState,
    id: Result<Path<AccountId>, PathRejection>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let Path(id) = id?;
    Ok(Json(ledger.list_transactions(id)?))
}

pub async fn transfer_funds(
    State(ledger): LedgerState,
    body: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferResponse>, ApiError> {
    let Json(request) = body?;
    let transactions =
        ledger.transfer(request.from_account_id, request.to_account_id, request.amount)?;
    Ok(Json(transactions.into()))
}
