//! Balance digests for cheap change detection.
//!
//! After the fetch -> create -> re-aggregate cycle the caller can compare
//! digests instead of full payloads to tell whether the balances view
//! changed. The digest covers every entry in list order plus the totals,
//! so the same payload always hashes the same and any reordering or
//! amount change produces a different digest.

use sha2::{Digest, Sha256};
use splitledger_types::{BalanceEntry, BalancesPayload};

/// SHA-256 over the payload in its canonical order.
#[must_use]
pub fn compute_balances_digest(payload: &BalancesPayload) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"splitledger:balances:v1:");
    hash_entries(&mut hasher, &payload.owed_to_you);
    hash_entries(&mut hasher, &payload.owed_by_you);
    hasher.update(payload.totals.to_me.minor_units().to_le_bytes());
    hasher.update(payload.totals.by_me.minor_units().to_le_bytes());
    hasher.update(payload.totals.net.minor_units().to_le_bytes());

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare with `expected`.
#[must_use]
pub fn verify_balances_digest(payload: &BalancesPayload, expected: &[u8; 32]) -> bool {
    compute_balances_digest(payload) == *expected
}

/// Hex form of [`compute_balances_digest`], for logs and cache keys.
#[must_use]
pub fn balances_digest_hex(payload: &BalancesPayload) -> String {
    hex::encode(compute_balances_digest(payload))
}

fn hash_entries(hasher: &mut Sha256, entries: &[BalanceEntry]) {
    hasher.update((entries.len() as u64).to_le_bytes());
    for entry in entries {
        hasher.update(entry.counterparty.id.0.to_le_bytes());
        hasher.update(entry.amount.minor_units().to_le_bytes());
    }
}
