// ABOUTME: Per-session conversation state holding the recognized diet preference
// ABOUTME: Preference moves Unset -> Set(tag) and may be overwritten, never cleared
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use serde::{Deserialize, Serialize};

use super::diet::DietPreference;

/// Session-scoped state read and written across turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Identifier of the owning session
    pub session_id: String,
    preference: Option<DietPreference>,
}

impl ConversationState {
    /// Fresh state with no preference
    #[must_use]
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            preference: None,
        }
    }

    /// Currently stored preference
    #[must_use]
    pub const fn preference(&self) -> Option<DietPreference> {
        self.preference
    }

    /// Whether a preference has been declared in this session
    #[must_use]
    pub const fn is_preference_known(&self) -> bool {
        self.preference.is_some()
    }

    /// Store a newly detected preference, replacing any previous one
    pub fn record_preference(&mut self, preference: DietPreference) {
        self.preference = Some(preference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let state = ConversationState::new("session-1");
        assert_eq!(state.preference(), None);
        assert!(!state.is_preference_known());
    }

    #[test]
    fn test_redeclaration_overwrites() {
        let mut state = ConversationState::new("session-1");
        state.record_preference(DietPreference::Vegan);
        state.record_preference(DietPreference::Keto);
        assert_eq!(state.preference(), Some(DietPreference::Keto));
    }
}
