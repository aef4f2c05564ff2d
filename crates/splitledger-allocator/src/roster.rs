//! Roster helpers for building the participant list of a new expense.

use std::collections::HashSet;

use splitledger_types::{Participant, ParticipantId};

/// Everyone on the roster except `viewer`. The payer is never offered as
/// a split target; their own portion is implicit.
#[must_use]
pub fn split_candidates(roster: &[Participant], viewer: ParticipantId) -> Vec<Participant> {
    roster.iter().filter(|p| p.id != viewer).cloned().collect()
}

/// Roster entries whose name or email contains `query`, ignoring case.
/// A blank query matches everyone.
#[must_use]
pub fn filter_roster<'a>(roster: &'a [Participant], query: &str) -> Vec<&'a Participant> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return roster.iter().collect();
    }
    roster.iter().filter(|p| p.matches_lowercase(&needle)).collect()
}

/// First identifier that appears more than once.
#[must_use]
pub fn find_duplicate(participants: &[Participant]) -> Option<ParticipantId> {
    let mut seen = HashSet::with_capacity(participants.len());
    participants
        .iter()
        .map(|p| p.id)
        .find(|id| !seen.insert(*id))
}
