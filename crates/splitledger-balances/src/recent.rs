//! Recent-expenses view: newest first, capped.

use splitledger_types::Expense;

/// Up to `limit` expenses, newest date first. Expenses on the same date
/// keep their input order.
#[must_use]
pub fn recent_expenses(expenses: &[Expense], limit: usize) -> Vec<&Expense> {
    let mut recent: Vec<&Expense> = expenses.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}
