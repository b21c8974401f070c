// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout the pizzeria. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Keep log wording out of the pizza and event code
//! * Attach the same structured fields every time a message is logged
//! * Provide consistent, human-readable output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::pizza` - Ingredient changes and the cooking lifecycle
//! * `messages::events` - Listener dispatch and listener failures
//! * `messages::config` - Configuration loading and validation
//!
//! # Usage
//!
//! ```rust
//! use the_pizzeria::observability::messages::{pizza::CookStarted, StructuredLog};
//!
//! let msg = CookStarted {
//!     size: 2,
//!     oven_time: 9,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
