// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for listener dispatch.

use crate::errors::ListenerError;
use crate::events::{EventName, ListenerId};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Event delivered to its listeners.
///
/// # Log Level
/// `trace!` - Fires on every emission
pub struct EventDispatched {
    pub event: EventName,
    pub listeners: usize,
    pub failures: usize,
}

impl Display for EventDispatched {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Event '{}' dispatched to {} listeners ({} failed)",
            self.event, self.listeners, self.failures
        )
    }
}

impl StructuredLog for EventDispatched {
    fn log(&self) {
        tracing::trace!(
            event = %self.event,
            listeners = self.listeners,
            failures = self.failures,
            "{}", self
        );
    }
}

/// A listener returned an error or panicked; delivery carried on.
///
/// # Log Level
/// `warn!` - Fault in caller-supplied code
///
/// # Example
/// ```
/// use the_pizzeria::errors::ListenerError;
/// use the_pizzeria::events::{EventName, ListenerId};
/// use the_pizzeria::observability::messages::events::ListenerFailed;
///
/// let error = ListenerError::failed("printer out of paper");
/// let msg = ListenerFailed {
///     event: EventName::CookStarted,
///     listener: ListenerId(3),
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ListenerFailed<'a> {
    pub event: EventName,
    pub listener: ListenerId,
    pub error: &'a ListenerError,
}

impl Display for ListenerFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Listener {} for '{}' failed: {}",
            self.listener, self.event, self.error
        )
    }
}

impl StructuredLog for ListenerFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            event = %self.event,
            listener = self.listener.0,
            error = %self.error,
            "{}", self
        );
    }
}
