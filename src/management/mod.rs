mod auth;
mod ledger;
mod pairs;

pub use auth::TokenManager;
pub use ledger::LedgerError;
pub use ledger::LedgerManager;
pub use pairs::PairManager;
