// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements the `Display` trait for the human-readable line
//! and [`StructuredLog`] for emitting it through `tracing` with typed fields at
//! the level that fits the event.
//!
//! * `pizza` - Ingredient changes and the cooking lifecycle
//! * `events` - Listener dispatch and listener failures
//! * `config` - Configuration loading and validation

use std::fmt::Display;
use tracing::Span;

pub mod config;
pub mod events;
pub mod pizza;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("pizzeria", span_name = name)
    }
}
