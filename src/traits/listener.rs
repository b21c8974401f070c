// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ListenerError;
use crate::events::PizzaEvent;

/// Something that wants to hear about pizza events.
///
/// Any closure `Fn(&PizzaEvent) -> Result<(), ListenerError>` is a listener.
/// For closures that cannot fail, use [`EventEmitter::on`](crate::events::EventEmitter::on),
/// which wraps them.
pub trait Listener: Send + Sync {
    fn on_event(&self, event: &PizzaEvent) -> Result<(), ListenerError>;
}

impl<F> Listener for F
where
    F: Fn(&PizzaEvent) -> Result<(), ListenerError> + Send + Sync,
{
    fn on_event(&self, event: &PizzaEvent) -> Result<(), ListenerError> {
        self(event)
    }
}
