// ABOUTME: Conversation state access for dialogue actions
// ABOUTME: Preference accessor trait, runtime-slot adapter, and in-process session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Conversation state access
//!
//! Actions never own the diet preference. They read and write it through a
//! [`PreferenceAccessor`], which is either the slot map sent by the dialogue
//! runtime ([`TrackerSlots`]) or a locked [`ConversationState`] taken from the
//! [`SessionStore`].

/// Preference accessor trait and its `ConversationState` implementation
pub mod accessor;
/// In-process per-session state with serialized turns
pub mod session_store;
/// Dialogue-runtime slot map adapter and slot events
pub mod tracker;

pub use accessor::PreferenceAccessor;
pub use session_store::{SessionStore, TurnGuard};
pub use tracker::{SlotEvent, TrackerSlots};

pub use crate::models::ConversationState;
