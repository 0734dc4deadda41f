use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;

use super::{
    Account, AccountError, AccountId, Decimal, IdGenerator, Transaction, TransactionKind,
};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("Account `{0}` not found")]
    AccountNotFound(AccountId),
    #[error("No transactions found for account `{0}`")]
    TransactionsNotFound(AccountId),
    #[error("Invalid transaction type `{0}`")]
    InvalidKind(String),
    #[error("Invalid account IDs: from `{from}`, to `{to}`")]
    InvalidAccount { from: AccountId, to: AccountId },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    Account(#[from] AccountError),
}

#[derive(Default, Debug)]
struct LedgerStore {
    accounts: BTreeMap<AccountId, Account>,
    transactions: HashMap<AccountId, Vec<Transaction>>,
}

impl LedgerStore {
    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&id)
            .ok_or(LedgerError::AccountNotFound(id))
    }

    fn append(&mut self, transaction: Transaction) {
        self.transactions
            .entry(transaction.get_account_id())
            .or_default()
            .push(transaction);
    }
}

/// The single owner of all accounts and their transaction logs.
///
/// Every mutation takes the write-lock for its whole check-then-apply sequence,
/// and every check that can fail runs before the first change is made. Readers
/// therefore never see a half-applied operation, and a failed operation leaves
/// the ledger as it was.
#[derive(Default, Debug)]
pub struct Ledger {
    store: RwLock<LedgerStore>,
    ids: IdGenerator,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    /// Opens an account seeded with `initial_balance`. A negative seed is accepted.
    pub fn open_account(
        &self,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        let owner = owner.into();
        if owner.trim().is_empty() {
            return Err(LedgerError::Validation("owner must not be empty".into()));
        }

        let mut store = self.store.write();
        let account = Account::new(self.ids.next_account_id(), owner, initial_balance);
        store.accounts.insert(account.get_id(), account.clone());

        info!(account = account.get_id(), %initial_balance, "Opened account");
        Ok(account)
    }

    pub fn get_account(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.store
            .read()
            .accounts
            .get(&id)
            .cloned()
            .ok_or(LedgerError::AccountNotFound(id))
    }

    /// All accounts, ordered by ID.
    pub fn list_accounts(&self) -> Vec<Account> {
        self.store.read().accounts.values().cloned().collect()
    }

    /// Records a deposit or a withdrawal against `account_id`.
    ///
    /// Transfer kinds are rejected here; they are only produced by [`Ledger::transfer`].
    pub fn record_transaction(
        &self,
        account_id: AccountId,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError> {
        let mut guard = self.store.write();
        let store = &mut *guard;

        let account = store.account_mut(account_id)?;
        match kind {
            TransactionKind::Deposit | TransactionKind::Withdrawal => {}
            other => return Err(LedgerError::InvalidKind(other.to_string())),
        }
        ensure_positive(amount)?;

        if kind == TransactionKind::Deposit {
            account.deposit(amount)?;
        } else {
            // `withdraw` returns early without touching the balance
            account.withdraw(amount)?;
        }
        let balance = account.get_balance();

        let transaction = Transaction::new(
            self.ids.next_transaction_id(),
            account_id,
            kind,
            amount,
            Utc::now(),
        );
        store.append(transaction.clone());

        info!(
            account = account_id,
            tx = transaction.get_transaction_id(),
            %kind,
            %amount,
            %balance,
            "Recorded transaction"
        );
        Ok(transaction)
    }

    /// The log of `account_id` in the order it was recorded.
    ///
    /// An account that exists but has never transacted is reported exactly like
    /// a missing one.
    pub fn list_transactions(&self, account_id: AccountId) -> Result<Vec<Transaction>, LedgerError> {
        self.store
            .read()
            .transactions
            .get(&account_id)
            .filter(|log| !log.is_empty())
            .cloned()
            .ok_or(LedgerError::TransactionsNotFound(account_id))
    }

    /// Moves `amount` from `from` to `to`, logging a `transfer_out` on the source
    /// and a `transfer_in` on the destination. Returns them in that order.
    pub fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(Transaction, Transaction), LedgerError> {
        let mut guard = self.store.write();
        let store = &mut *guard;

        if !store.accounts.contains_key(&from) || !store.accounts.contains_key(&to) {
            return Err(LedgerError::InvalidAccount { from, to });
        }
        ensure_positive(amount)?;

        // The credit is checked up front so neither side is touched on failure.
        // A self-transfer restores the balance it started from and can't overflow.
        if from != to {
            store.account_mut(to)?.can_deposit(amount)?;
        }
        store.account_mut(from)?.withdraw(amount)?;
        store.account_mut(to)?.deposit(amount)?;

        let now = Utc::now();
        let transfer_out = Transaction::new(
            self.ids.next_transaction_id(),
            from,
            TransactionKind::TransferOut,
            amount,
            now,
        );
        let transfer_in = Transaction::new(
            self.ids.next_transaction_id(),
            to,
            TransactionKind::TransferIn,
            amount,
            now,
        );
        store.append(transfer_out.clone());
        store.append(transfer_in.clone());

        info!(
            from,
            to,
            %amount,
            out_tx = transfer_out.get_transaction_id(),
            in_tx = transfer_in.get_transaction_id(),
            "Transferred funds"
        );
        Ok((transfer_out, transfer_in))
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), LedgerError> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "amount must be positive, got {amount}"
        )))
    }
}
