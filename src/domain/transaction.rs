use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AccountId, Decimal, LedgerError, TransactionId};

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::TransferOut => "transfer_out",
            TransactionKind::TransferIn => "transfer_in",
        }
    }

    /// Whether this kind adds to the balance of the account it is logged on.
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Deposit | TransactionKind::TransferIn)
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdrawal" => Ok(TransactionKind::Withdrawal),
            "transfer_out" => Ok(TransactionKind::TransferOut),
            "transfer_in" => Ok(TransactionKind::TransferIn),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable entry in one account's log.
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Transaction {
    id: TransactionId,
    account_id: AccountId,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        account_id: AccountId,
        kind: TransactionKind,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            kind,
            amount,
            timestamp,
        }
    }

    pub fn get_transaction_id(&self) -> TransactionId {
        self.id
    }
    pub fn get_account_id(&self) -> AccountId {
        self.account_id
    }
    pub fn get_kind(&self) -> TransactionKind {
        self.kind
    }
    pub fn get_amount(&self) -> Decimal {
        self.amount
    }
    pub fn get_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The amount with the sign of its effect on the account balance.
    pub fn get_signed_amount(&self) -> Decimal {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}
