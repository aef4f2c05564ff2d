//! System-wide constants for the SplitLedger engine.

/// Number of fractional digits carried by every amount (cents).
pub const MONEY_SCALE: u32 = 2;

/// Minor units per major unit (100 cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Default reconciliation tolerance in minor units (one cent).
pub const DEFAULT_RECONCILIATION_TOLERANCE_MINOR: i64 = 1;

/// Default number of expenses shown in the recent-expenses view.
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Largest magnitude, in minor units, accepted from text or the wire
/// (100 billion major units). Keeps sums over any realistic snapshot far
/// from `i64` overflow.
pub const MAX_AMOUNT_MINOR: i64 = 10_000_000_000_000;
