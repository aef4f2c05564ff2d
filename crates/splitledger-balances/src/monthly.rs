//! Monthly spending totals for trend views.
//!
//! Groups expenses by the calendar month of their date and sums their
//! amounts. Output is ascending by month, so the same set of expenses
//! always yields the same rows whatever order it arrives in.

use std::collections::BTreeMap;

use splitledger_types::{Expense, Money, MonthlyTotal, YearMonth};

#[must_use]
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<YearMonth, Money> = BTreeMap::new();
    for expense in expenses {
        let total = by_month.entry(YearMonth::of(expense.date)).or_default();
        *total = total.saturating_add(expense.amount);
    }

    by_month
        .into_iter()
        .map(|(period, total)| MonthlyTotal { period, total })
        .collect()
}
