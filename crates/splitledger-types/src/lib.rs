//! # splitledger-types
//!
//! Shared types, errors, and configuration for the **SplitLedger** engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`ExpenseId`]
//! - **Money**: [`Money`], integer minor units with 2-decimal formatting
//! - **Participants**: [`Participant`]
//! - **Expense model**: [`Expense`], [`Share`], [`CreateExpenseRequest`], [`SplitLine`]
//! - **Balance model**: [`BalanceEntry`], [`BalanceTotals`], [`BalancesPayload`],
//!   [`YearMonth`], [`MonthlyTotal`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`SplitLedgerError`] with `SL_ERR_` prefix codes
//! - **Constants**: money scale and defaults

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod money;
pub mod participant;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitledger_types::{Money, Participant, Expense, ...};

pub use balance::*;
pub use config::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use money::*;
pub use participant::*;

// Constants are accessed via `splitledger_types::constants::FOO`
// (not re-exported to avoid name collisions).
