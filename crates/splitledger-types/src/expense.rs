//! Expense model.
//!
//! An [`Expense`] is a snapshot of a persisted record: one payer, a total,
//! and the shares owed by each participant. The engine never mutates an
//! expense; new expenses leave the engine as a [`CreateExpenseRequest`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, Money, Participant, ParticipantId};

/// One participant's portion of an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    #[serde(rename = "user")]
    pub participant: Participant,
    pub amount: Money,
}

impl Share {
    #[must_use]
    pub fn new(participant: Participant, amount: Money) -> Self {
        Self {
            participant,
            amount,
        }
    }
}

/// A recorded shared expense.
///
/// Invariant for well-formed records: the shares add up to `amount`
/// exactly. Records fetched from the remote service are not trusted to
/// hold it; see [`Expense::is_reconciled`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(rename = "paid_by")]
    pub payer: Participant,
    #[serde(rename = "splits", default)]
    pub shares: Vec<Share>,
}

impl Expense {
    /// Sum of all share amounts, `None` if it would overflow.
    #[must_use]
    pub fn shares_total(&self) -> Option<Money> {
        Money::checked_sum(self.shares.iter().map(|s| s.amount))
    }

    /// Whether the shares add up to the expense amount exactly.
    #[must_use]
    pub fn is_reconciled(&self) -> bool {
        self.shares_total() == Some(self.amount)
    }

    /// The share held by `participant`, if any.
    #[must_use]
    pub fn share_of(&self, participant: ParticipantId) -> Option<&Share> {
        self.shares.iter().find(|s| s.participant.id == participant)
    }

    /// Whether `participant` paid for or holds a share of this expense.
    #[must_use]
    pub fn involves(&self, participant: ParticipantId) -> bool {
        self.payer.id == participant || self.share_of(participant).is_some()
    }
}

/// One line of a creation request: who owes how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLine {
    #[serde(rename = "user_id")]
    pub participant_id: ParticipantId,
    pub amount: Money,
}

/// Body submitted to the remote creation endpoint once the split has been
/// allocated and reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: Money,
    pub splits: Vec<SplitLine>,
}

impl CreateExpenseRequest {
    /// Sum of all split lines.
    #[must_use]
    pub fn splits_total(&self) -> Money {
        self.splits.iter().map(|s| s.amount).sum()
    }

    /// Serialize to the JSON body expected by the creation endpoint.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    /// Expense paid by `payer` whose amount is the sum of `shares`
    /// (given as `(participant, cents)` pairs).
    pub fn dummy(
        id: u64,
        payer: &Participant,
        date: NaiveDate,
        shares: &[(&Participant, i64)],
    ) -> Self {
        let shares: Vec<Share> = shares
            .iter()
            .map(|(p, cents)| Share::new((*p).clone(), Money::from_minor(*cents)))
            .collect();
        Self {
            id: ExpenseId(id),
            description: format!("expense {id}"),
            amount: shares.iter().map(|s| s.amount).sum(),
            date,
            payer: payer.clone(),
            shares,
        }
    }
}
