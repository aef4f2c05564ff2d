//! # splitledger-allocator
//!
//! **Split allocation for SplitLedger.**
//!
//! Divides an expense among its participants in integer cents and checks
//! the result before it is submitted:
//!
//! - **Exact**: equal splits add up to the total to the last cent
//! - **Deterministic**: same inputs in the same order give the same shares;
//!   remainder cents go to the first-listed participants
//! - **Stateless**: every operation is a pure function of its inputs
//!
//! ## Creation Flow
//!
//! ```text
//! ExpenseDraft -> allocate() -> reconcile() -> CreateExpenseRequest -> (remote persistence)
//! ```

pub mod allocate;
pub mod draft;
pub mod reconcile;
pub mod roster;

pub use allocate::{Allocation, SplitMode, allocate};
pub use draft::{ExpenseDraft, prepare_expense};
pub use reconcile::reconcile;
pub use roster::{filter_roster, find_duplicate, split_candidates};
