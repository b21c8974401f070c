// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod listener;
mod pizza;

pub use config::ConfigError;
pub use listener::ListenerError;
pub use pizza::PizzaError;
