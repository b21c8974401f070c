// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::pizza::ReleaseHandle;

/// The fixed set of event names a pizza publishes.
///
/// The string forms are the names listeners have always subscribed to, so
/// they are kept in camelCase on the wire and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventName {
    CookStarted,
    IngredientAdded,
    MaxIngredientsReached,
    IngredientRemoved,
    ErrorRemovingIngredient,
    CookFinished,
    CharredPizza,
}

impl EventName {
    pub const ALL: [EventName; 7] = [
        EventName::CookStarted,
        EventName::IngredientAdded,
        EventName::MaxIngredientsReached,
        EventName::IngredientRemoved,
        EventName::ErrorRemovingIngredient,
        EventName::CookFinished,
        EventName::CharredPizza,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::CookStarted => "cookStarted",
            EventName::IngredientAdded => "ingredientAdded",
            EventName::MaxIngredientsReached => "maxIngredientsReached",
            EventName::IngredientRemoved => "ingredientRemoved",
            EventName::ErrorRemovingIngredient => "errorRemovingIngredient",
            EventName::CookFinished => "cookFinished",
            EventName::CharredPizza => "charredPizza",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pizza event '{0}'")]
pub struct UnknownEventName(pub String);

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownEventName(s.to_string()))
    }
}

/// An emitted event together with its payload.
#[derive(Debug, Clone)]
pub enum PizzaEvent {
    CookStarted,
    IngredientAdded(String),
    MaxIngredientsReached,
    IngredientRemoved(String),
    /// Carries the ingredient that was asked for and not found.
    ErrorRemovingIngredient(String),
    /// Carries the handle that stops the charring timer.
    CookFinished(ReleaseHandle),
    CharredPizza,
}

impl PizzaEvent {
    pub fn name(&self) -> EventName {
        match self {
            PizzaEvent::CookStarted => EventName::CookStarted,
            PizzaEvent::IngredientAdded(_) => EventName::IngredientAdded,
            PizzaEvent::MaxIngredientsReached => EventName::MaxIngredientsReached,
            PizzaEvent::IngredientRemoved(_) => EventName::IngredientRemoved,
            PizzaEvent::ErrorRemovingIngredient(_) => EventName::ErrorRemovingIngredient,
            PizzaEvent::CookFinished(_) => EventName::CookFinished,
            PizzaEvent::CharredPizza => EventName::CharredPizza,
        }
    }

    /// The ingredient payload, for the three ingredient events.
    pub fn ingredient(&self) -> Option<&str> {
        match self {
            PizzaEvent::IngredientAdded(ingredient)
            | PizzaEvent::IngredientRemoved(ingredient)
            | PizzaEvent::ErrorRemovingIngredient(ingredient) => Some(ingredient),
            _ => None,
        }
    }

    pub fn release_handle(&self) -> Option<&ReleaseHandle> {
        match self {
            PizzaEvent::CookFinished(handle) => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_round_trip_through_strings() {
        for name in EventName::ALL {
            assert_eq!(name.as_str().parse::<EventName>(), Ok(name));
        }
    }

    #[test]
    fn test_unknown_event_name_is_rejected() {
        let err = "pizzaBurned".parse::<EventName>().unwrap_err();
        assert_eq!(err, UnknownEventName("pizzaBurned".to_string()));
        assert_eq!(err.to_string(), "unknown pizza event 'pizzaBurned'");
    }

    #[test]
    fn test_serde_uses_camel_case_names() {
        let name: EventName = serde_yaml::from_str("errorRemovingIngredient").unwrap();
        assert_eq!(name, EventName::ErrorRemovingIngredient);
        assert_eq!(
            serde_yaml::to_string(&EventName::CharredPizza).unwrap().trim(),
            "charredPizza"
        );
    }

    #[test]
    fn test_payload_accessors() {
        let added = PizzaEvent::IngredientAdded("Tomato".to_string());
        assert_eq!(added.name(), EventName::IngredientAdded);
        assert_eq!(added.ingredient(), Some("Tomato"));
        assert!(added.release_handle().is_none());

        let missing = PizzaEvent::ErrorRemovingIngredient("Peper".to_string());
        assert_eq!(missing.ingredient(), Some("Peper"));

        assert_eq!(PizzaEvent::CharredPizza.ingredient(), None);
        assert_eq!(PizzaEvent::MaxIngredientsReached.name(), EventName::MaxIngredientsReached);
    }
}
