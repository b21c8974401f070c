// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pizza events and the listener registry that delivers them.

mod emitter;
mod event;

pub use emitter::{DispatchReport, EventEmitter, ListenerFailure, ListenerId};
pub use event::{EventName, PizzaEvent, UnknownEventName};
