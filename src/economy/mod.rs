//! Resource accounting for the construction economy.

pub mod ledger;

pub use ledger::{LedgerSnapshot, ResourceAccount, ResourceLedger};
