//! Balance views produced by aggregation.
//!
//! Balances are directional: "they owe you" and "you owe them" are two
//! separate non-negative magnitudes per counterparty. A counterparty can
//! appear on both sides at once; netting is a derived projection, never
//! part of the entry itself.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};

use crate::{Money, Participant, ParticipantId};

/// Amount accumulated against one counterparty in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    #[serde(rename = "user")]
    pub counterparty: Participant,
    pub amount: Money,
}

/// Global totals over both directional lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceTotals {
    /// Sum of everything owed to the viewer.
    pub to_me: Money,
    /// Sum of everything the viewer owes.
    pub by_me: Money,
    /// `to_me - by_me`.
    pub net: Money,
}

impl BalanceTotals {
    /// Totals over the two entry lists.
    #[must_use]
    pub fn from_entries(owed_to_you: &[BalanceEntry], owed_by_you: &[BalanceEntry]) -> Self {
        let to_me = Money::saturating_sum(owed_to_you.iter().map(|e| e.amount));
        let by_me = Money::saturating_sum(owed_by_you.iter().map(|e| e.amount));
        Self {
            to_me,
            by_me,
            net: to_me - by_me,
        }
    }
}

/// Everything the balances view needs for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalancesPayload {
    pub owed_to_you: Vec<BalanceEntry>,
    pub owed_by_you: Vec<BalanceEntry>,
    pub totals: BalanceTotals,
}

impl BalancesPayload {
    /// Build a payload, deriving the totals from the lists.
    #[must_use]
    pub fn new(owed_to_you: Vec<BalanceEntry>, owed_by_you: Vec<BalanceEntry>) -> Self {
        let totals = BalanceTotals::from_entries(&owed_to_you, &owed_by_you);
        Self {
            owed_to_you,
            owed_by_you,
            totals,
        }
    }

    /// Whether the totals agree with the entry lists.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.totals == BalanceTotals::from_entries(&self.owed_to_you, &self.owed_by_you)
    }

    /// Amount `counterparty` owes the viewer.
    #[must_use]
    pub fn owed_to_you_by(&self, counterparty: ParticipantId) -> Money {
        lookup(&self.owed_to_you, counterparty)
    }

    /// Amount the viewer owes `counterparty`.
    #[must_use]
    pub fn owed_by_you_to(&self, counterparty: ParticipantId) -> Money {
        lookup(&self.owed_by_you, counterparty)
    }

    /// Copy with both lists ordered largest amount first. Equal amounts
    /// keep their first-encounter order.
    #[must_use]
    pub fn sorted_by_magnitude(&self) -> Self {
        let mut sorted = self.clone();
        sorted.owed_to_you.sort_by(|a, b| b.amount.cmp(&a.amount));
        sorted.owed_by_you.sort_by(|a, b| b.amount.cmp(&a.amount));
        sorted
    }
}

fn lookup(entries: &[BalanceEntry], counterparty: ParticipantId) -> Money {
    entries
        .iter()
        .find(|e| e.counterparty.id == counterparty)
        .map_or(Money::ZERO, |e| e.amount)
}

// ---------------------------------------------------------------------------
// Monthly totals
// ---------------------------------------------------------------------------

/// Calendar month key, ordered chronologically. Displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sum of expense amounts recorded in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    #[serde(rename = "month")]
    pub period: YearMonth,
    pub total: Money,
}
