// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::errors::ListenerError;
use crate::events::{EventName, PizzaEvent};
use crate::observability::messages::events::{EventDispatched, ListenerFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::Listener;
use crate::utils::sync::{read, write};

/// Identifies one registration, for [`EventEmitter::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    pub listener: ListenerId,
    pub error: ListenerError,
}

/// What happened when an event was emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Listeners that were invoked, including the ones that failed.
    pub delivered: usize,
    pub failures: Vec<ListenerFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

type Registrations = HashMap<EventName, Vec<(ListenerId, Arc<dyn Listener>)>>;

/// Per-event-name listener registry with isolated, in-order delivery.
///
/// Listeners for a name are invoked in the order they were registered. Each
/// invocation is wrapped so that an `Err` or a panic is logged and recorded in
/// the [`DispatchReport`] without stopping delivery to the listeners after it.
///
/// `emit` snapshots the listener list before invoking anything, so a listener
/// may register or remove listeners (or call back into the pizza that owns this
/// emitter) while being notified. Changes take effect from the next emission.
#[derive(Default)]
pub struct EventEmitter {
    listeners: RwLock<Registrations>,
    next_id: AtomicU64,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener that cannot fail.
    pub fn on<F>(&self, event: EventName, listener: F) -> ListenerId
    where
        F: Fn(&PizzaEvent) + Send + Sync + 'static,
    {
        self.subscribe(
            event,
            Arc::new(move |e: &PizzaEvent| -> Result<(), ListenerError> {
                listener(e);
                Ok(())
            }),
        )
    }

    /// Register a listener whose errors are reported through the dispatch report.
    pub fn try_on<L>(&self, event: EventName, listener: L) -> ListenerId
    where
        L: Listener + 'static,
    {
        self.subscribe(event, Arc::new(listener))
    }

    pub fn subscribe(&self, event: EventName, listener: Arc<dyn Listener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        write(&self.listeners)
            .entry(event)
            .or_default()
            .push((id, listener));
        id
    }

    /// Remove a registration. Returns `false` if `id` was not registered for `event`.
    pub fn off(&self, event: EventName, id: ListenerId) -> bool {
        let mut listeners = write(&self.listeners);
        let Some(registered) = listeners.get_mut(&event) else {
            return false;
        };
        let before = registered.len();
        registered.retain(|(registered_id, _)| *registered_id != id);
        before != registered.len()
    }

    pub fn listener_count(&self, event: EventName) -> usize {
        read(&self.listeners).get(&event).map_or(0, Vec::len)
    }

    pub fn emit(&self, event: &PizzaEvent) -> DispatchReport {
        let name = event.name();
        let snapshot: Vec<(ListenerId, Arc<dyn Listener>)> = read(&self.listeners)
            .get(&name)
            .cloned()
            .unwrap_or_default();

        let mut report = DispatchReport::default();
        for (id, listener) in snapshot {
            report.delivered += 1;
            let outcome = match catch_unwind(AssertUnwindSafe(|| listener.on_event(event))) {
                Ok(result) => result,
                Err(panic) => Err(ListenerError::Panicked(panic_message(panic.as_ref()))),
            };

            if let Err(error) = outcome {
                ListenerFailed {
                    event: name,
                    listener: id,
                    error: &error,
                }
                .log();
                report.failures.push(ListenerFailure { listener: id, error });
            }
        }

        EventDispatched {
            event: name,
            listeners: report.delivered,
            failures: report.failures.len(),
        }
        .log();

        report
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<EventName, usize> = read(&self.listeners)
            .iter()
            .map(|(name, registered)| (*name, registered.len()))
            .collect();
        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn(&PizzaEvent) + Send + Sync>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let make = move |tag: &str| -> Box<dyn Fn(&PizzaEvent) + Send + Sync> {
            let sink = Arc::clone(&sink);
            let tag = tag.to_string();
            Box::new(move |event: &PizzaEvent| {
                sink.lock()
                    .unwrap()
                    .push(format!("{}:{}", tag, event.ingredient().unwrap_or("-")));
            })
        };
        (seen, make)
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let emitter = EventEmitter::new();
        let (seen, make) = recorder();
        let first = make("first");
        let second = make("second");
        let third = make("third");
        emitter.on(EventName::IngredientAdded, move |e| first(e));
        emitter.on(EventName::IngredientAdded, move |e| second(e));
        emitter.on(EventName::IngredientAdded, move |e| third(e));

        let report = emitter.emit(&PizzaEvent::IngredientAdded("Tomato".to_string()));

        assert_eq!(report.delivered, 3);
        assert!(report.is_clean());
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first:Tomato", "second:Tomato", "third:Tomato"]
        );
    }

    #[test]
    fn test_emit_only_reaches_listeners_for_that_name() {
        let emitter = EventEmitter::new();
        let (seen, make) = recorder();
        let removed = make("removed");
        emitter.on(EventName::IngredientRemoved, move |e| removed(e));

        let report = emitter.emit(&PizzaEvent::IngredientAdded("Tomato".to_string()));

        assert_eq!(report.delivered, 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failing_listener_does_not_block_later_listeners() {
        let emitter = EventEmitter::new();
        let (seen, make) = recorder();
        let after = make("after");

        let failing = emitter.try_on(EventName::CookStarted, |_: &PizzaEvent| -> Result<(), ListenerError> {
            Err(ListenerError::failed("no oven mitts"))
        });
        emitter.on(EventName::CookStarted, move |e| after(e));

        let report = emitter.emit(&PizzaEvent::CookStarted);

        assert_eq!(report.delivered, 2);
        assert_eq!(
            report.failures,
            vec![ListenerFailure {
                listener: failing,
                error: ListenerError::Failed("no oven mitts".to_string()),
            }]
        );
        assert_eq!(*seen.lock().unwrap(), vec!["after:-"]);
    }

    #[test]
    fn test_panicking_listener_is_isolated() {
        let emitter = EventEmitter::new();
        let (seen, make) = recorder();
        let after = make("after");

        emitter.on(EventName::CharredPizza, |_| panic!("smoke alarm"));
        emitter.on(EventName::CharredPizza, move |e| after(e));

        let report = emitter.emit(&PizzaEvent::CharredPizza);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].error,
            ListenerError::Panicked("smoke alarm".to_string())
        );
        assert_eq!(*seen.lock().unwrap(), vec!["after:-"]);

        // The registry is still usable after a panic inside dispatch
        assert_eq!(emitter.emit(&PizzaEvent::CharredPizza).delivered, 2);
    }

    #[test]
    fn test_off_removes_only_the_given_registration() {
        let emitter = EventEmitter::new();
        let first = emitter.on(EventName::CookStarted, |_| {});
        let second = emitter.on(EventName::CookStarted, |_| {});

        assert_eq!(emitter.listener_count(EventName::CookStarted), 2);
        assert!(emitter.off(EventName::CookStarted, first));
        assert!(!emitter.off(EventName::CookStarted, first));
        assert!(!emitter.off(EventName::CharredPizza, second));
        assert_eq!(emitter.listener_count(EventName::CookStarted), 1);
    }

    #[test]
    fn test_listener_registered_during_dispatch_waits_for_next_emit() {
        let emitter = Arc::new(EventEmitter::new());
        let calls = Arc::new(AtomicU64::new(0));

        let inner_emitter = Arc::clone(&emitter);
        let inner_calls = Arc::clone(&calls);
        emitter.on(EventName::CookStarted, move |_| {
            let calls = Arc::clone(&inner_calls);
            inner_emitter.on(EventName::CookStarted, move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        });

        assert_eq!(emitter.emit(&PizzaEvent::CookStarted).delivered, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(emitter.emit(&PizzaEvent::CookStarted).delivered, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
