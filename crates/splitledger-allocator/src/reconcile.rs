//! Reconciliation check: do the allocated shares add up to the total?
//!
//! Runs in the creation flow after [`crate::allocate`] and before anything
//! is submitted. Equal splits always pass; custom splits pass when the gap
//! between their sum and the total is within the configured tolerance.

use splitledger_types::{Money, Result, SplitLedgerError};

use crate::Allocation;

/// Check that `allocation` reconciles to `total` within `tolerance`.
///
/// # Errors
/// Returns [`SplitLedgerError::SplitMismatch`] carrying the computed sum
/// and the target total if `|sum - total| > tolerance`, or an
/// `amount out of range` validation error if the sum overflows.
pub fn reconcile(allocation: &Allocation, total: Money, tolerance: Money) -> Result<()> {
    let sum = allocation.total()?;
    let gap = (sum - total).abs();
    if gap > tolerance {
        tracing::warn!(
            sum = %sum,
            total = %total,
            gap = %gap,
            tolerance = %tolerance,
            "Split does not reconcile"
        );
        return Err(SplitLedgerError::SplitMismatch { sum, total });
    }
    Ok(())
}
