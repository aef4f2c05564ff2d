//! Participants: the people an expense can be split between.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A person known to the ledger, as listed by the remote user directory.
///
/// Equality and hashing look at [`Participant::id`] only. Two records
/// with the same ID but different names are the same participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// Display name (`username` on the wire).
    #[serde(rename = "username")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Participant {
    #[must_use]
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Case-insensitive substring match against name or email.
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(needle))
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Participant {
    /// Participant `id` named `user<id>`.
    pub fn dummy(id: u64) -> Self {
        Self::new(ParticipantId(id), format!("user{id}"))
    }
}
