// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // config files + constants
pub mod errors;         // error handling
pub mod events;         // event names, payloads, listener registry
pub mod observability;
pub mod pizza;          // the pizza and its cooking lifecycle
pub mod traits;         // listener abstraction
pub mod utils;
