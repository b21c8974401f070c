// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors returned by pizza operations.
//!
//! Every failure reported here is also announced on the event channel where one
//! exists (`maxIngredientsReached`, `errorRemovingIngredient`), so callers that
//! never subscribe still observe the outcome through the returned `Result`.

use thiserror::Error;

use crate::pizza::CookState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PizzaError {
    /// The pizza already holds as many ingredients as its size allows
    #[error("Max ingredients ({max}) reached")]
    MaxIngredientsReached { max: i64 },

    /// A removal asked for an ingredient that is not on the pizza
    #[error("Cannot remove {ingredient} because it is not on the pizza")]
    IngredientNotFound { ingredient: String },

    /// Cooking is a one-shot transition out of the raw state
    #[error("Cannot cook a pizza that is already {state}")]
    CannotCook { state: CookState },

    /// The charring timer fired before the pizza was released
    #[error("Cannot release a charred pizza")]
    AlreadyCharred,

    /// Oven timers need a running tokio runtime
    #[error("No tokio runtime available to drive the oven timers")]
    NoRuntime,
}
