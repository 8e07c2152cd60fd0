// ABOUTME: Adapter over the slot map carried in dialogue-runtime action requests
// ABOUTME: Reads the user_preference slot and describes slot writes as runtime events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::accessor::PreferenceAccessor;
use crate::constants::slots;
use crate::models::DietPreference;

/// Slot write reported back to the dialogue runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEvent {
    /// Always `slot`
    pub event: String,
    /// Slot name
    pub name: String,
    /// New slot value
    pub value: Value,
}

impl SlotEvent {
    /// `SlotSet(name, value)` event
    #[must_use]
    pub fn slot_set(name: &str, value: impl Into<Value>) -> Self {
        Self {
            event: "slot".to_owned(),
            name: name.to_owned(),
            value: value.into(),
        }
    }
}

/// Slot values received from the dialogue runtime for one action call
///
/// Writes update the local copy only; the runtime learns about them from the
/// [`SlotEvent`]s the action returns.
#[derive(Debug, Clone, Default)]
pub struct TrackerSlots {
    slots: HashMap<String, Value>,
}

impl TrackerSlots {
    /// Wrap a slot map
    #[must_use]
    pub const fn new(slots: HashMap<String, Value>) -> Self {
        Self { slots }
    }

    /// String value of a slot, ignoring null and non-string values
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(Value::as_str)
    }
}

impl PreferenceAccessor for TrackerSlots {
    fn preference(&self) -> Option<DietPreference> {
        let raw = self.get_str(slots::USER_PREFERENCE)?;
        match raw.parse() {
            Ok(preference) => Some(preference),
            Err(e) => {
                debug!(slot = raw, error = %e, "Ignoring unrecognized preference slot value");
                None
            }
        }
    }

    fn set_preference(&mut self, preference: DietPreference) {
        self.slots.insert(
            slots::USER_PREFERENCE.to_owned(),
            Value::String(preference.as_str().to_owned()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn slots_with(value: Value) -> TrackerSlots {
        TrackerSlots::new(HashMap::from([(slots::USER_PREFERENCE.to_owned(), value)]))
    }

    #[test]
    fn test_reads_preference_slot() {
        assert_eq!(
            slots_with(json!("keto")).preference(),
            Some(DietPreference::Keto)
        );
        assert_eq!(slots_with(Value::Null).preference(), None);
        assert_eq!(slots_with(json!("carnivore")).preference(), None);
        assert_eq!(TrackerSlots::default().preference(), None);
    }

    #[test]
    fn test_write_is_visible_locally() {
        let mut slots = TrackerSlots::default();
        slots.set_preference(DietPreference::GlutenFree);
        assert!(slots.is_preference_known());
        assert_eq!(slots.get_str(slots::USER_PREFERENCE), Some("gluten-free"));
    }

    #[test]
    fn test_slot_event_wire_shape() {
        let event = SlotEvent::slot_set("user_preference", "vegan");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "slot", "name": "user_preference", "value": "vegan"})
        );
    }
}
