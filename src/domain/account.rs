use serde::Serialize;

use crate::domain::{AccountId, Decimal};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AccountError {
    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("Balance overflow: {balance} + {requested} is out of range")]
    BalanceOverflow { balance: Decimal, requested: Decimal },
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Account {
    id: AccountId,
    owner: String,
    balance: Decimal,
}

impl Account {
    pub(crate) fn new(id: AccountId, owner: String, initial_balance: Decimal) -> Self {
        Self {
            id,
            owner,
            balance: initial_balance,
        }
    }

    /// Credits `amount`. On error the balance is left untouched.
    pub(crate) fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.balance = self.can_deposit(amount)?;
        Ok(())
    }

    /// The balance a deposit of `amount` would leave, without applying it.
    pub(crate) fn can_deposit(&self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                requested: amount,
            })
    }

    /// Debits `amount`, refusing to take the balance below what is available.
    /// On error the balance is left untouched.
    pub(crate) fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if self.balance >= amount {
            self.balance -= amount;
            Ok(())
        } else {
            Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            })
        }
    }

    pub fn get_id(&self) -> AccountId {
        self.id
    }
    pub fn get_owner(&self) -> &str {
        &self.owner
    }
    pub fn get_balance(&self) -> Decimal {
        self.balance
    }
}
