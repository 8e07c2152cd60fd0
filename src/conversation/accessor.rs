// ABOUTME: Read/write access to the session's diet preference
// ABOUTME: Implemented by runtime slot maps and by in-process conversation state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use crate::models::{ConversationState, DietPreference};

/// Get/set access to the diet preference of one session
pub trait PreferenceAccessor: Send + Sync {
    /// Stored preference, if any
    fn preference(&self) -> Option<DietPreference>;

    /// Store `preference`, replacing any previous value
    fn set_preference(&mut self, preference: DietPreference);

    /// Whether a preference is stored
    fn is_preference_known(&self) -> bool {
        self.preference().is_some()
    }
}

impl PreferenceAccessor for ConversationState {
    fn preference(&self) -> Option<DietPreference> {
        Self::preference(self)
    }

    fn set_preference(&mut self, preference: DietPreference) {
        self.record_preference(preference);
    }
}
