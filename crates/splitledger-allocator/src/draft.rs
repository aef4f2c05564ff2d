//! Expense creation flow.
//!
//! Turns user input into the request body for the remote creation
//! endpoint:
//!
//! ```text
//! ExpenseDraft -> validate description -> allocate() -> reconcile() -> CreateExpenseRequest
//! ```
//!
//! The flow is all-or-nothing: any failure returns an error and no request
//! is produced, so nothing partially split can reach persistence.

use std::collections::HashMap;

use splitledger_types::{
    CreateExpenseRequest, EngineConfig, Money, Participant, ParticipantId, Result, SplitLine,
    ValidationIssue,
};

use crate::{SplitMode, allocate, reconcile};

/// A new expense as entered by the payer, before allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    /// Who the expense is split between, in display order.
    pub participants: Vec<Participant>,
    pub mode: SplitMode,
}

impl ExpenseDraft {
    #[must_use]
    pub fn equal(
        description: impl Into<String>,
        amount: Money,
        participants: Vec<Participant>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            participants,
            mode: SplitMode::Equal,
        }
    }

    #[must_use]
    pub fn custom(
        description: impl Into<String>,
        amount: Money,
        participants: Vec<Participant>,
        amounts: HashMap<ParticipantId, Money>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            participants,
            mode: SplitMode::Custom(amounts),
        }
    }
}

/// Validate, allocate and reconcile a draft.
///
/// # Errors
/// - `description required` if the description is blank
/// - any error from [`allocate`]
/// - `SplitMismatch` if the shares miss the amount by more than
///   `config.reconciliation_tolerance`
pub fn prepare_expense(draft: &ExpenseDraft, config: &EngineConfig) -> Result<CreateExpenseRequest> {
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(ValidationIssue::EmptyDescription.into());
    }

    let allocation = allocate(draft.amount, &draft.participants, &draft.mode)?;
    reconcile(&allocation, draft.amount, config.reconciliation_tolerance)?;

    let splits: Vec<SplitLine> = allocation
        .into_shares()
        .into_iter()
        .map(|share| SplitLine {
            participant_id: share.participant.id,
            amount: share.amount,
        })
        .collect();

    tracing::info!(
        description,
        amount = %draft.amount,
        mode = draft.mode.label(),
        splits = splits.len(),
        "Expense creation request prepared"
    );

    Ok(CreateExpenseRequest {
        description: description.to_string(),
        amount: draft.amount,
        splits,
    })
}

#[cfg(test)]
mod tests {
    use splitledger_types::SplitLedgerError;

    use super::*;

    fn cents(n: i64) -> Money {
        Money::from_minor(n)
    }

    fn friends() -> Vec<Participant> {
        vec![Participant::dummy(2), Participant::dummy(3), Participant::dummy(4)]
    }

    #[test]
    fn equal_draft_becomes_request() {
        let draft = ExpenseDraft::equal("  Pizza night ", cents(1000), friends());
        let req = prepare_expense(&draft, &EngineConfig::default()).unwrap();
        assert_eq!(req.description, "Pizza night");
        assert_eq!(req.amount, cents(1000));
        let lines: Vec<(u64, i64)> = req
            .splits
            .iter()
            .map(|l| (l.participant_id.0, l.amount.minor_units()))
            .collect();
        assert_eq!(lines, vec![(2, 334), (3, 333), (4, 333)]);
        assert_eq!(req.splits_total(), req.amount);
    }

    #[test]
    fn custom_draft_drops_zero_lines() {
        let draft = ExpenseDraft::custom(
            "Groceries",
            cents(1500),
            friends(),
            HashMap::from([(ParticipantId(2), Money::ZERO), (ParticipantId(3), cents(1500))]),
        );
        let req = prepare_expense(&draft, &EngineConfig::default()).unwrap();
        assert_eq!(req.splits.len(), 1);
        assert_eq!(req.splits[0].participant_id, ParticipantId(3));
    }

    #[test]
    fn custom_mismatch_blocks_request() {
        let draft = ExpenseDraft::custom(
            "Rent",
            cents(5000),
            friends(),
            HashMap::from([(ParticipantId(2), cents(2000)), (ParticipantId(3), cents(2000))]),
        );
        let err = prepare_expense(&draft, &EngineConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SplitLedgerError::SplitMismatch { sum, total } if sum == cents(4000) && total == cents(5000)
        ));
    }

    #[test]
    fn strict_config_rejects_one_cent_gap() {
        let amounts = HashMap::from([
            (ParticipantId(2), cents(333)),
            (ParticipantId(3), cents(333)),
            (ParticipantId(4), cents(333)),
        ]);
        let draft = ExpenseDraft::custom("Cab", cents(1000), friends(), amounts);
        assert!(prepare_expense(&draft, &EngineConfig::default()).is_ok());
        assert!(prepare_expense(&draft, &EngineConfig::strict()).is_err());
    }

    #[test]
    fn blank_description_rejected_first() {
        let draft = ExpenseDraft::equal("   ", Money::ZERO, vec![]);
        let err = prepare_expense(&draft, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.validation_issue(), Some(&ValidationIssue::EmptyDescription));
    }

    #[test]
    fn allocation_errors_propagate() {
        let no_one = ExpenseDraft::equal("Tea", cents(300), vec![]);
        let err = prepare_expense(&no_one, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.validation_issue(), Some(&ValidationIssue::NoParticipants));

        let free = ExpenseDraft::equal("Tea", Money::ZERO, friends());
        let err = prepare_expense(&free, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.validation_issue(), Some(&ValidationIssue::NonPositiveAmount));
    }

    #[test]
    fn oversized_custom_amounts_are_rejected_not_panicking() {
        let typed = SplitMode::custom_from_text([
            (ParticipantId(2), "90000000000000000"),
            (ParticipantId(3), "90000000000000000"),
        ]);
        assert_eq!(
            typed.unwrap_err().validation_issue(),
            Some(&ValidationIssue::AmountOutOfRange)
        );

        let half = cents(i64::MAX / 2 + 1);
        let draft = ExpenseDraft::custom(
            "Yacht",
            Money::CENT,
            friends()[..2].to_vec(),
            HashMap::from([(ParticipantId(2), half), (ParticipantId(3), half)]),
        );
        let err = prepare_expense(&draft, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.validation_issue(), Some(&ValidationIssue::AmountOutOfRange));
    }

    #[test]
    fn request_serializes_for_submission() {
        let draft = ExpenseDraft::equal("Dinner", cents(6000), friends()[..2].to_vec());
        let req = prepare_expense(&draft, &EngineConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(value["description"], "Dinner");
        assert_eq!(value["amount"], "60.00");
        assert_eq!(value["splits"][0]["user_id"], 2);
        assert_eq!(value["splits"][0]["amount"], "30.00");
    }
}
