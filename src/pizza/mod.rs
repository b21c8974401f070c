// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The pizza entity and its cooking lifecycle.

mod entity;
mod release;
mod size;
mod state;


pub use entity::{OvenSettings, Pizza};
pub use release::ReleaseHandle;
pub use size::{PizzaSize, UnknownPizzaSize};
pub use state::CookState;
