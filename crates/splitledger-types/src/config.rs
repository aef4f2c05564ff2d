//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::{constants, Money, Result, SplitLedgerError};

/// Tunables for the allocation and view layers.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest accepted gap between the sum of custom shares and the
    /// expense amount. Zero demands exact reconciliation.
    pub reconciliation_tolerance: Money,
    /// Number of expenses in the recent-expenses view.
    pub recent_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reconciliation_tolerance: Money::from_minor(
                constants::DEFAULT_RECONCILIATION_TOLERANCE_MINOR,
            ),
            recent_limit: constants::DEFAULT_RECENT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Config that rejects any gap between custom shares and the total.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reconciliation_tolerance: Money::ZERO,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| SplitLedgerError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reconciliation_tolerance.is_negative() {
            return Err(SplitLedgerError::Configuration(format!(
                "reconciliation_tolerance must not be negative, got {}",
                self.reconciliation_tolerance
            )));
        }
        Ok(())
    }
}
