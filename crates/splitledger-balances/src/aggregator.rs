//! Pure balance aggregation.
//!
//! ```text
//! aggregate(&[Expense], viewer) -> BalancesPayload
//! ```
//!
//! For every share of every expense:
//!
//! | payer  | share owner | effect                                  |
//! |--------|-------------|-----------------------------------------|
//! | viewer | other       | owner owes the viewer (`owed_to_you`)   |
//! | other  | viewer      | viewer owes the payer (`owed_by_you`)   |
//! | payer  | payer       | self-share, skipped                     |
//! | other  | other       | not the viewer's business, skipped      |
//!
//! Running totals are keyed by counterparty ID and only ever grow. The two
//! directions are never netted against each other, so one counterparty can
//! sit in both lists. Each list keeps the order in which counterparties
//! were first encountered.

use std::collections::HashMap;

use splitledger_types::{BalanceEntry, BalancesPayload, Expense, Money, Participant, ParticipantId};

/// Insertion-ordered running totals keyed by counterparty.
#[derive(Default)]
struct DirectionalLedger {
    index: HashMap<ParticipantId, usize>,
    entries: Vec<BalanceEntry>,
}

impl DirectionalLedger {
    fn credit(&mut self, counterparty: &Participant, amount: Money) {
        match self.index.get(&counterparty.id) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.amount = entry.amount.saturating_add(amount);
            }
            None => {
                self.index.insert(counterparty.id, self.entries.len());
                self.entries.push(BalanceEntry {
                    counterparty: counterparty.clone(),
                    amount,
                });
            }
        }
    }

    fn into_entries(self) -> Vec<BalanceEntry> {
        self.entries
    }
}

/// Aggregate `expenses` into directional balances as seen by `viewer`.
///
/// Zero-amount shares are ignored and negative ones are dropped with a
/// warning, so every entry stays a positive magnitude. Expenses whose
/// shares do not add up to their amount are still aggregated share by
/// share, with a warning.
#[must_use]
pub fn aggregate(expenses: &[Expense], viewer: ParticipantId) -> BalancesPayload {
    let mut owed_to_you = DirectionalLedger::default();
    let mut owed_by_you = DirectionalLedger::default();
    let mut skipped_self_shares = 0_usize;

    for expense in expenses {
        if !expense.is_reconciled() {
            tracing::warn!(
                expense = %expense.id,
                amount = %expense.amount,
                shares_total = ?expense.shares_total(),
                "Aggregating expense whose shares do not match its amount"
            );
        }

        let payer = &expense.payer;
        for share in &expense.shares {
            let owner = &share.participant;
            if owner.id == payer.id {
                skipped_self_shares += 1;
                continue;
            }
            if share.amount.is_zero() {
                continue;
            }
            if share.amount.is_negative() {
                tracing::warn!(
                    expense = %expense.id,
                    participant = %owner.id,
                    amount = %share.amount,
                    "Skipping negative share"
                );
                continue;
            }

            if payer.id == viewer {
                owed_to_you.credit(owner, share.amount);
            } else if owner.id == viewer {
                owed_by_you.credit(payer, share.amount);
            }
        }
    }

    let payload = BalancesPayload::new(owed_to_you.into_entries(), owed_by_you.into_entries());

    tracing::debug!(
        viewer = %viewer,
        expenses = expenses.len(),
        owed_to_you = payload.owed_to_you.len(),
        owed_by_you = payload.owed_by_you.len(),
        skipped_self_shares,
        net = %payload.totals.net,
        "Balances aggregated"
    );

    payload
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use splitledger_types::ExpenseId;

    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn cents(n: i64) -> Money {
        Money::from_minor(n)
    }

    fn ids(entries: &[BalanceEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.counterparty.id.0).collect()
    }

    #[test]
    fn no_expenses_no_balances() {
        let payload = aggregate(&[], ParticipantId(1));
        assert_eq!(payload, BalancesPayload::default());
    }

    #[test]
    fn directional_entries_coexist() {
        let me = Participant::dummy(1);
        let friend = Participant::dummy(2);
        let expenses = vec![
            Expense::dummy(1, &me, day(), &[(&friend, 1000)]),
            Expense::dummy(2, &friend, day(), &[(&me, 400)]),
        ];
        let payload = aggregate(&expenses, me.id);

        assert_eq!(payload.owed_to_you.len(), 1);
        assert_eq!(payload.owed_to_you[0].counterparty, friend);
        assert_eq!(payload.owed_to_you[0].amount, cents(1000));
        assert_eq!(payload.owed_by_you.len(), 1);
        assert_eq!(payload.owed_by_you[0].counterparty, friend);
        assert_eq!(payload.owed_by_you[0].amount, cents(400));
        assert_eq!(payload.totals.to_me, cents(1000));
        assert_eq!(payload.totals.by_me, cents(400));
        assert_eq!(payload.totals.net, cents(600));
    }

    #[test]
    fn self_share_never_produces_entry() {
        let me = Participant::dummy(1);
        let friend = Participant::dummy(2);
        let expenses = vec![Expense::dummy(1, &me, day(), &[(&me, 500), (&friend, 500)])];
        let payload = aggregate(&expenses, me.id);

        assert_eq!(ids(&payload.owed_to_you), vec![2]);
        assert!(payload.owed_by_you.is_empty());
        assert_eq!(payload.totals.to_me, cents(500));
    }

    #[test]
    fn payer_self_share_skipped_when_viewer_is_debtor() {
        let me = Participant::dummy(1);
        let friend = Participant::dummy(2);
        let expenses = vec![Expense::dummy(1, &friend, day(), &[(&friend, 700), (&me, 300)])];
        let payload = aggregate(&expenses, me.id);

        assert!(payload.owed_to_you.is_empty());
        assert_eq!(ids(&payload.owed_by_you), vec![2]);
        assert_eq!(payload.totals.by_me, cents(300));
    }

    #[test]
    fn unrelated_shares_are_skipped() {
        let me = Participant::dummy(1);
        let bob = Participant::dummy(2);
        let carol = Participant::dummy(3);
        let expenses = vec![Expense::dummy(1, &bob, day(), &[(&carol, 900)])];
        let payload = aggregate(&expenses, me.id);
        assert_eq!(payload, BalancesPayload::default());
    }

    #[test]
    fn zero_shares_are_ignored() {
        let me = Participant::dummy(1);
        let bob = Participant::dummy(2);
        let carol = Participant::dummy(3);
        let expenses = vec![Expense::dummy(1, &me, day(), &[(&bob, 0), (&carol, 250)])];
        let payload = aggregate(&expenses, me.id);
        assert_eq!(ids(&payload.owed_to_you), vec![3]);
    }

    #[test]
    fn negative_shares_are_dropped() {
        let me = Participant::dummy(1);
        let bob = Participant::dummy(2);
        let listing = r#"{
            "id": 5, "description": "Refund mixup", "amount": "10.00", "date": "2024-06-01",
            "paid_by": {"id": 1, "username": "user1"},
            "splits": [
                {"user": {"id": 2, "username": "user2"}, "amount": "-5.00"},
                {"user": {"id": 3, "username": "user3"}, "amount": "15.00"}
            ]
        }"#;
        let expense: Expense = serde_json::from_str(listing).unwrap();
        let payload = aggregate(&[expense.clone()], me.id);
        assert_eq!(ids(&payload.owed_to_you), vec![3]);
        assert_eq!(payload.owed_to_you_by(bob.id), Money::ZERO);
        assert_eq!(payload.totals.to_me, cents(1500));

        let debtor_view = aggregate(&[expense], bob.id);
        assert_eq!(debtor_view, BalancesPayload::default());
    }

    #[test]
    fn oversized_snapshot_clamps_instead_of_panicking() {
        let me = Participant::dummy(1);
        let bob = Participant::dummy(2);
        let half = i64::MAX / 2 + 1;
        let expenses = vec![
            Expense::dummy(1, &me, day(), &[(&bob, half)]),
            Expense::dummy(2, &me, day(), &[(&bob, half)]),
        ];
        let payload = aggregate(&expenses, me.id);
        assert_eq!(payload.owed_to_you_by(bob.id), cents(i64::MAX));
        assert_eq!(payload.totals.net, cents(i64::MAX));
    }

    #[test]
    fn repeated_counterparty_merges_by_id() {
        let me = Participant::dummy(1);
        let bob = Participant::dummy(2);
        let bob_renamed = Participant::new(ParticipantId(2), "Robert");
        let expenses = vec![
            Expense::dummy(1, &me, day(), &[(&bob, 1000)]),
            Expense::dummy(2, &me, day(), &[(&bob_renamed, 250)]),
        ];
        let payload = aggregate(&expenses, me.id);

        assert_eq!(payload.owed_to_you.len(), 1);
        assert_eq!(payload.owed_to_you[0].amount, cents(1250));
        // First encounter supplies the display record.
        assert_eq!(payload.owed_to_you[0].counterparty.name, "user2");
    }

    #[test]
    fn entries_keep_first_encounter_order() {
        let me = Participant::dummy(1);
        let (b, c, d) = (Participant::dummy(2), Participant::dummy(3), Participant::dummy(4));
        let expenses = vec![
            Expense::dummy(1, &me, day(), &[(&c, 100)]),
            Expense::dummy(2, &me, day(), &[(&b, 9_000), (&d, 50)]),
            Expense::dummy(3, &me, day(), &[(&c, 100)]),
        ];
        let payload = aggregate(&expenses, me.id);
        assert_eq!(ids(&payload.owed_to_you), vec![3, 2, 4]);
    }

    #[test]
    fn totals_are_consistent_with_lists() {
        let me = Participant::dummy(1);
        let b = Participant::dummy(2);
        let c = Participant::dummy(3);
        let expenses = vec![
            Expense::dummy(1, &me, day(), &[(&me, 334), (&b, 333), (&c, 333)]),
            Expense::dummy(2, &b, day(), &[(&me, 1250), (&c, 1250)]),
            Expense::dummy(3, &c, day(), &[(&me, 75)]),
        ];
        let payload = aggregate(&expenses, me.id);
        assert!(payload.is_consistent());
        assert_eq!(payload.totals.to_me, cents(666));
        assert_eq!(payload.totals.by_me, cents(1325));
        assert_eq!(payload.totals.net, cents(-659));
    }

    #[test]
    fn unreconciled_expense_still_aggregated() {
        let me = Participant::dummy(1);
        let bob = Participant::dummy(2);
        let mut expense = Expense::dummy(1, &me, day(), &[(&bob, 3000)]);
        expense.amount = cents(6000);
        expense.id = ExpenseId(77);
        let payload = aggregate(&[expense], me.id);
        assert_eq!(payload.totals.to_me, cents(3000));
    }
}
