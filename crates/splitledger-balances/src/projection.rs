//! Derived views over a [`BalancesPayload`].
//!
//! The aggregator keeps the two directions apart. When a caller wants one
//! number per counterparty (for a per-friend chart, say) it derives it
//! here instead of changing the aggregator's output.

use std::collections::HashMap;

use serde::Serialize;
use splitledger_types::{BalancesPayload, Money, Participant, ParticipantId};

/// Both directions for one counterparty, plus their difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterpartyNet {
    #[serde(rename = "user")]
    pub counterparty: Participant,
    pub owed_to_you: Money,
    pub owed_by_you: Money,
    /// `owed_to_you - owed_by_you`; positive means they owe you.
    pub net: Money,
}

/// Merge both lists by counterparty ID, ordered by `|net|` descending.
/// Counterparties with the same magnitude keep first-seen order
/// (`owed_to_you` first, then `owed_by_you`).
#[must_use]
pub fn net_by_counterparty(payload: &BalancesPayload) -> Vec<CounterpartyNet> {
    let mut index: HashMap<ParticipantId, usize> = HashMap::new();
    let mut rows: Vec<CounterpartyNet> = Vec::new();

    for entry in &payload.owed_to_you {
        let slot = row_slot(&mut index, &mut rows, &entry.counterparty);
        rows[slot].owed_to_you = rows[slot].owed_to_you.saturating_add(entry.amount);
    }
    for entry in &payload.owed_by_you {
        let slot = row_slot(&mut index, &mut rows, &entry.counterparty);
        rows[slot].owed_by_you = rows[slot].owed_by_you.saturating_add(entry.amount);
    }
    for row in &mut rows {
        row.net = row.owed_to_you - row.owed_by_you;
    }

    rows.sort_by(|a, b| b.net.abs().cmp(&a.net.abs()));
    rows
}

fn row_slot(
    index: &mut HashMap<ParticipantId, usize>,
    rows: &mut Vec<CounterpartyNet>,
    counterparty: &Participant,
) -> usize {
    if let Some(&slot) = index.get(&counterparty.id) {
        return slot;
    }
    rows.push(CounterpartyNet {
        counterparty: counterparty.clone(),
        owed_to_you: Money::ZERO,
        owed_by_you: Money::ZERO,
        net: Money::ZERO,
    });
    let slot = rows.len() - 1;
    index.insert(counterparty.id, slot);
    slot
}
