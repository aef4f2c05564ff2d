//! # splitledger-balances
//!
//! **Pure balance aggregation for SplitLedger.**
//!
//! Turns a snapshot of expense records into the views the ledger shows a
//! user. Every function here:
//!
//! - **Has no side effects**: no I/O, no retained state between calls
//! - **Is deterministic**: same input, same output, list order included
//! - **Never nets directions**: "you owe them" and "they owe you" stay
//!   separate until a caller asks for a derived projection
//!
//! ```text
//! Vec<Expense> -> aggregate()            -> BalancesPayload -> net_by_counterparty()
//!              -> monthly_totals()       -> Vec<MonthlyTotal>
//!              -> recent_expenses()      -> Vec<&Expense>
//! ```

pub mod aggregator;
pub mod digest;
pub mod monthly;
pub mod projection;
pub mod recent;

pub use aggregator::aggregate;
pub use digest::{balances_digest_hex, compute_balances_digest, verify_balances_digest};
pub use monthly::monthly_totals;
pub use projection::{CounterpartyNet, net_by_counterparty};
pub use recent::recent_expenses;
