use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Decimal, Transaction};

#[derive(Deserialize, Debug)]
pub struct CreateAccountRequest {
    pub owner: String,
    #[serde(default)]
    pub initial_balance: Decimal,
}

#[derive(Deserialize, Debug)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
}

#[derive(Deserialize, Debug)]
pub struct TransferRequest {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Decimal,
}

#[derive(Serialize, Debug)]
pub struct TransferResponse {
    pub transfer_out: Transaction,
    pub transfer_in: Transaction,
}

impl From<(Transaction, Transaction)> for TransferResponse {
    fn from((transfer_out, transfer_in): (Transaction, Transaction)) -> Self {
        Self {
            transfer_out,
            transfer_in,
        }
    }
}
