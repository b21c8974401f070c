// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for ingredient changes and the cooking lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Ingredients being added, rejected or removed
//! * The oven timer starting and finishing
//! * The pizza being released or left to char

use crate::observability::messages::StructuredLog;
use crate::pizza::CookState;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Ingredient appended to the pizza.
///
/// # Log Level
/// `debug!` - Routine state change
pub struct IngredientAdded<'a> {
    pub ingredient: &'a str,
    pub count: usize,
    pub max: i64,
}

impl Display for IngredientAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ingredient '{}' added ({}/{})",
            self.ingredient, self.count, self.max
        )
    }
}

impl StructuredLog for IngredientAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            ingredient = self.ingredient,
            count = self.count,
            max = self.max,
            "{}", self
        );
    }
}

/// Ingredient rejected because the pizza is full.
///
/// # Log Level
/// `info!` - Capacity signal, not a fault
///
/// # Example
/// ```
/// use the_pizzeria::observability::messages::pizza::CapacityReached;
///
/// let msg = CapacityReached {
///     ingredient: "Oregano",
///     max: 6,
/// };
///
/// assert_eq!(msg.to_string(), "Max ingredients (6) reached, 'Oregano' was not added");
/// ```
pub struct CapacityReached<'a> {
    pub ingredient: &'a str,
    pub max: i64,
}

impl Display for CapacityReached<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Max ingredients ({}) reached, '{}' was not added",
            self.max, self.ingredient
        )
    }
}

impl StructuredLog for CapacityReached<'_> {
    fn log(&self) {
        tracing::info!(ingredient = self.ingredient, max = self.max, "{}", self);
    }
}

/// Ingredient removed from the pizza.
///
/// # Log Level
/// `debug!` - Routine state change
pub struct IngredientRemoved<'a> {
    pub ingredient: &'a str,
    pub count: usize,
}

impl Display for IngredientRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ingredient '{}' removed, {} left",
            self.ingredient, self.count
        )
    }
}

impl StructuredLog for IngredientRemoved<'_> {
    fn log(&self) {
        tracing::debug!(ingredient = self.ingredient, count = self.count, "{}", self);
    }
}

/// Removal requested for an ingredient that is not on the pizza.
///
/// # Log Level
/// `warn!` - Caller asked for something impossible
pub struct IngredientMissing<'a> {
    pub ingredient: &'a str,
}

impl Display for IngredientMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cannot remove '{}' because it is not on the pizza",
            self.ingredient
        )
    }
}

impl StructuredLog for IngredientMissing<'_> {
    fn log(&self) {
        tracing::warn!(ingredient = self.ingredient, "{}", self);
    }
}

/// Pizza went into the oven.
///
/// # Log Level
/// `info!` - Lifecycle transition
///
/// The span built from this message wraps the whole oven task so the finish,
/// release and charring messages carry the pizza's size.
pub struct CookStarted {
    pub size: i64,
    pub oven_time: i64,
}

impl Display for CookStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pizza of size {} is in the oven for {} time units",
            self.size, self.oven_time
        )
    }
}

impl StructuredLog for CookStarted {
    fn log(&self) {
        tracing::info!(size = self.size, oven_time = self.oven_time, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "oven",
            span_name = name,
            size = self.size,
            oven_time = self.oven_time,
        )
    }
}

/// `cook` called on a pizza that is not raw.
///
/// # Log Level
/// `warn!` - Rejected lifecycle transition
pub struct CookRejected {
    pub state: CookState,
}

impl Display for CookRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ignoring cook request, pizza is already {}", self.state)
    }
}

impl StructuredLog for CookRejected {
    fn log(&self) {
        tracing::warn!(state = %self.state, "{}", self);
    }
}

/// Oven timer elapsed; the charring timer is now running.
///
/// # Log Level
/// `info!` - Lifecycle transition
pub struct CookFinished {
    pub time_to_release: i64,
}

impl Display for CookFinished {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pizza is ready, release it within {} time units",
            self.time_to_release
        )
    }
}

impl StructuredLog for CookFinished {
    fn log(&self) {
        tracing::info!(time_to_release = self.time_to_release, "{}", self);
    }
}

/// Charring timer cancelled through the release handle.
///
/// # Log Level
/// `info!` - Lifecycle transition
pub struct PizzaReleased;

impl Display for PizzaReleased {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pizza was released")
    }
}

impl StructuredLog for PizzaReleased {
    fn log(&self) {
        tracing::info!("{}", self);
    }
}

/// Charring timer fired before anyone released the pizza.
///
/// # Log Level
/// `warn!` - Terminal failure of the cooking lifecycle
pub struct PizzaCharred {
    pub time_to_release: i64,
}

impl Display for PizzaCharred {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pizza was left in the oven {} time units past ready and is charred",
            self.time_to_release
        )
    }
}

impl StructuredLog for PizzaCharred {
    fn log(&self) {
        tracing::warn!(time_to_release = self.time_to_release, "{}", self);
    }
}
