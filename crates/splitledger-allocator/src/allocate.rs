//! Pure split allocation.
//!
//! Partitions an expense amount among participants in minor units:
//!
//! ```text
//! allocate(total, participants, mode) -> Allocation
//! ```
//!
//! ## Equal mode
//!
//! `base = floor(cents / n)`, `remainder = cents - base * n`. Everyone gets
//! `base`; the first `remainder` participants in input order get one more
//! cent. The shares always add up to the total exactly and differ by at
//! most one cent.
//!
//! ## Custom mode
//!
//! Amounts are taken verbatim for each listed participant. Non-positive or
//! missing amounts drop the participant from the result. Custom amounts are
//! never rejected here; reconciliation against the total is a separate
//! step (see [`crate::reconcile`]).

use std::collections::HashMap;

use splitledger_types::{Money, Participant, ParticipantId, Result, Share, ValidationIssue};

use crate::roster::find_duplicate;

/// How an expense is divided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitMode {
    /// Same amount for everyone, remainder cents to the first listed.
    Equal,
    /// Caller-chosen amount per participant.
    Custom(HashMap<ParticipantId, Money>),
}

impl SplitMode {
    /// Custom mode from user-typed amounts. Blank text counts as zero.
    pub fn custom_from_text<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ParticipantId, &'a str)>,
    {
        let mut amounts = HashMap::new();
        for (id, text) in entries {
            let amount = if text.trim().is_empty() {
                Money::ZERO
            } else {
                Money::parse(text)?
            };
            amounts.insert(id, amount);
        }
        Ok(Self::Custom(amounts))
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Custom(_) => "custom",
        }
    }
}

/// Shares produced by [`allocate`], in participant input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    shares: Vec<Share>,
}

impl Allocation {
    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    #[must_use]
    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }

    /// Sum of all shares.
    ///
    /// # Errors
    /// `amount out of range` if the sum does not fit in [`Money`].
    pub fn total(&self) -> Result<Money> {
        Money::checked_sum(self.shares.iter().map(|s| s.amount))
            .ok_or_else(|| ValidationIssue::AmountOutOfRange.into())
    }

    /// Share allocated to `participant`, if they are in the result.
    #[must_use]
    pub fn get(&self, participant: ParticipantId) -> Option<Money> {
        self.shares
            .iter()
            .find(|s| s.participant.id == participant)
            .map(|s| s.amount)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Share> {
        self.shares.iter()
    }
}

/// Allocate `total` among `participants`.
///
/// # Errors
/// - `no participants` if `participants` is empty
/// - `amount must be positive` if `total <= 0`
/// - `duplicate participant` if an identifier appears twice
/// - `amount out of range` if custom amounts overflow when summed
pub fn allocate(total: Money, participants: &[Participant], mode: &SplitMode) -> Result<Allocation> {
    if participants.is_empty() {
        return Err(ValidationIssue::NoParticipants.into());
    }
    if !total.is_positive() {
        return Err(ValidationIssue::NonPositiveAmount.into());
    }
    if let Some(dup) = find_duplicate(participants) {
        return Err(ValidationIssue::DuplicateParticipant(dup).into());
    }

    let shares = match mode {
        SplitMode::Equal => split_equally(total, participants)?,
        SplitMode::Custom(amounts) => take_custom(participants, amounts),
    };
    let allocation = Allocation { shares };
    let allocated = allocation.total()?;

    tracing::debug!(
        mode = mode.label(),
        participants = participants.len(),
        shares = allocation.len(),
        total = %total,
        allocated = %allocated,
        "Split allocated"
    );

    Ok(allocation)
}

fn split_equally(total: Money, participants: &[Participant]) -> Result<Vec<Share>> {
    let cents = total.minor_units();
    let n = i64::try_from(participants.len()).map_err(|_| ValidationIssue::AmountOutOfRange)?;
    let base = cents / n;
    let remainder = cents - base * n;

    Ok(participants
        .iter()
        .zip(0_i64..)
        .map(|(participant, idx)| {
            let extra = i64::from(idx < remainder);
            Share::new(participant.clone(), Money::from_minor(base + extra))
        })
        .collect())
}

fn take_custom(participants: &[Participant], amounts: &HashMap<ParticipantId, Money>) -> Vec<Share> {
    participants
        .iter()
        .filter_map(|participant| {
            let amount = amounts
                .get(&participant.id)
                .copied()
                .unwrap_or(Money::ZERO);
            amount
                .is_positive()
                .then(|| Share::new(participant.clone(), amount))
        })
        .collect()
}
