mod account;
mod id_generator;
mod ledger;
mod transaction;

pub use account::*;
pub use id_generator::IdGenerator;
pub use ledger::*;
pub use transaction::*;

pub use rust_decimal::Decimal;

pub type AccountId = u64;
pub type TransactionId = u64;
