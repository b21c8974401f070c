// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::pin::pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::consts::{
    BASE_OVEN_TIME, DEFAULT_TIME_TO_RELEASE, DEFAULT_TIME_UNIT, INGREDIENTS_PER_SIZE,
    OVEN_TIME_PER_SIZE,
};
use crate::errors::PizzaError;
use crate::events::{EventEmitter, EventName, ListenerId, PizzaEvent};
use crate::observability::messages::pizza::*;
use crate::observability::messages::StructuredLog;
use crate::pizza::{CookState, PizzaSize, ReleaseHandle};
use crate::traits::Listener;
use crate::utils::sync::lock;

/// Timing knobs for the oven.
///
/// Oven time and the release window are counted in abstract time units; `time_unit`
/// says how long one of them lasts on the tokio clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvenSettings {
    pub time_unit: Duration,
    pub time_to_release: i64,
}

impl Default for OvenSettings {
    fn default() -> Self {
        Self {
            time_unit: DEFAULT_TIME_UNIT,
            time_to_release: DEFAULT_TIME_TO_RELEASE,
        }
    }
}

/// A pizza that announces its ingredient changes and cooking progress.
///
/// Sizes are not validated: zero or negative sizes give a pizza with no room for
/// ingredients and a short (or instant) bake. Derived values saturate instead of
/// overflowing.
///
/// Cooking spawns a task on the current tokio runtime, so `cook` is called on an
/// `Arc<Pizza>`. The task keeps the pizza alive until the lifecycle ends.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use the_pizzeria::events::EventName;
/// use the_pizzeria::pizza::{CookState, Pizza, PizzaSize};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), the_pizzeria::errors::PizzaError> {
/// let pizza = Arc::new(Pizza::new(PizzaSize::Individual));
/// pizza.on(EventName::CookFinished, |event| {
///     if let Some(handle) = event.release_handle() {
///         let _ = handle.release();
///     }
/// });
///
/// pizza.add("Tomato")?.add("Basil")?;
/// pizza.cook()?;
///
/// assert_eq!(pizza.done().await, CookState::Released);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pizza {
    size: i64,
    oven_time: i64,
    max_ingredients: i64,
    time_to_release: i64,
    time_unit: Duration,
    ingredients: Mutex<Vec<String>>,
    state: Arc<watch::Sender<CookState>>,
    /// Terminal state, published once the oven task has delivered its last event.
    settled: watch::Sender<Option<CookState>>,
    emitter: EventEmitter,
}

impl Pizza {
    pub fn new(size: impl Into<i64>) -> Self {
        Self::with_settings(size, OvenSettings::default())
    }

    pub fn with_settings(size: impl Into<i64>, settings: OvenSettings) -> Self {
        let size = size.into();
        let (state, _) = watch::channel(CookState::Raw);
        let (settled, _) = watch::channel(None);
        Self {
            size,
            oven_time: oven_time_for(size),
            max_ingredients: max_ingredients_for(size),
            time_to_release: settings.time_to_release,
            time_unit: settings.time_unit,
            ingredients: Mutex::new(Vec::new()),
            state: Arc::new(state),
            settled,
            emitter: EventEmitter::new(),
        }
    }

    /// The preset sizes on the menu, by name.
    pub fn sizes() -> [(&'static str, i64); 3] {
        PizzaSize::ALL.map(|size| (size.name(), size.value()))
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn oven_time(&self) -> i64 {
        self.oven_time
    }

    pub fn max_ingredients(&self) -> i64 {
        self.max_ingredients
    }

    pub fn time_to_release(&self) -> i64 {
        self.time_to_release
    }

    pub fn ingredients(&self) -> Vec<String> {
        lock(&self.ingredients).clone()
    }

    pub fn state(&self) -> CookState {
        *self.state.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<CookState> {
        self.state.subscribe()
    }

    pub fn on<F>(&self, event: EventName, listener: F) -> ListenerId
    where
        F: Fn(&PizzaEvent) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener)
    }

    pub fn try_on<L>(&self, event: EventName, listener: L) -> ListenerId
    where
        L: Listener + 'static,
    {
        self.emitter.try_on(event, listener)
    }

    pub fn off(&self, event: EventName, id: ListenerId) -> bool {
        self.emitter.off(event, id)
    }

    pub fn listener_count(&self, event: EventName) -> usize {
        self.emitter.listener_count(event)
    }

    /// Append an ingredient if there is room.
    ///
    /// Emits `ingredientAdded` on success; emits `maxIngredientsReached` and returns
    /// [`PizzaError::MaxIngredientsReached`] when the pizza is full.
    pub fn add(&self, ingredient: impl Into<String>) -> Result<&Self, PizzaError> {
        let ingredient = ingredient.into();
        let count = {
            let mut ingredients = lock(&self.ingredients);
            if has_room(ingredients.len(), self.max_ingredients) {
                ingredients.push(ingredient.clone());
                Some(ingredients.len())
            } else {
                None
            }
        };

        match count {
            Some(count) => {
                IngredientAdded {
                    ingredient: &ingredient,
                    count,
                    max: self.max_ingredients,
                }
                .log();
                self.emitter.emit(&PizzaEvent::IngredientAdded(ingredient));
                Ok(self)
            }
            None => {
                CapacityReached {
                    ingredient: &ingredient,
                    max: self.max_ingredients,
                }
                .log();
                self.emitter.emit(&PizzaEvent::MaxIngredientsReached);
                Err(PizzaError::MaxIngredientsReached {
                    max: self.max_ingredients,
                })
            }
        }
    }

    /// Remove the first occurrence of `ingredient` (exact, case-sensitive match).
    ///
    /// Emits `ingredientRemoved` on success; emits `errorRemovingIngredient` and
    /// returns [`PizzaError::IngredientNotFound`] when nothing matches.
    pub fn remove(&self, ingredient: &str) -> Result<&Self, PizzaError> {
        let count = {
            let mut ingredients = lock(&self.ingredients);
            ingredients
                .iter()
                .position(|candidate| candidate == ingredient)
                .map(|index| {
                    ingredients.remove(index);
                    ingredients.len()
                })
        };

        match count {
            Some(count) => {
                IngredientRemoved { ingredient, count }.log();
                self.emitter
                    .emit(&PizzaEvent::IngredientRemoved(ingredient.to_string()));
                Ok(self)
            }
            None => {
                IngredientMissing { ingredient }.log();
                self.emitter
                    .emit(&PizzaEvent::ErrorRemovingIngredient(ingredient.to_string()));
                Err(PizzaError::IngredientNotFound {
                    ingredient: ingredient.to_string(),
                })
            }
        }
    }

    /// Put a raw pizza in the oven.
    ///
    /// Emits `cookStarted` right away. After `oven_time` units the pizza becomes
    /// `Ready` and `cookFinished` is emitted with a [`ReleaseHandle`]; if nobody
    /// releases it within `time_to_release` more units it becomes `Charred` and
    /// `charredPizza` is emitted.
    ///
    /// Only a `Raw` pizza can be cooked. Must be called from within a tokio runtime.
    pub fn cook(self: &Arc<Self>) -> Result<&Arc<Self>, PizzaError> {
        let runtime = Handle::try_current().map_err(|_| PizzaError::NoRuntime)?;

        let mut current = CookState::Raw;
        let started = self.state.send_if_modified(|state| {
            if *state == CookState::Raw {
                *state = CookState::Baking;
                true
            } else {
                current = *state;
                false
            }
        });
        if !started {
            CookRejected { state: current }.log();
            return Err(PizzaError::CannotCook { state: current });
        }

        let start_msg = CookStarted {
            size: self.size,
            oven_time: self.oven_time,
        };
        start_msg.log();
        let span = start_msg.span("cook");

        self.emitter.emit(&PizzaEvent::CookStarted);
        runtime.spawn(Arc::clone(self).bake().instrument(span));

        Ok(self)
    }

    /// Wait until the pizza has been released or has charred.
    ///
    /// Resolves only after the oven task is through with its listeners, so every
    /// `cookFinished` and `charredPizza` listener has returned by then. Never
    /// resolves for a pizza that is not cooked.
    pub async fn done(&self) -> CookState {
        let mut receiver = self.settled.subscribe();
        let finished = match receiver.wait_for(Option::is_some).await {
            Ok(settled) => *settled,
            Err(_) => None,
        };
        finished.unwrap_or_else(|| self.state())
    }

    async fn bake(self: Arc<Self>) {
        tokio::time::sleep(self.units(self.oven_time)).await;
        self.state.send_replace(CookState::Ready);

        // The charring deadline starts counting before listeners hear about it
        let charring = pin!(tokio::time::sleep(self.units(self.time_to_release)));
        let handle = ReleaseHandle::new(Arc::clone(&self.state), CancellationToken::new());

        CookFinished {
            time_to_release: self.time_to_release,
        }
        .log();
        self.emitter.emit(&PizzaEvent::CookFinished(handle.clone()));

        tokio::select! {
            biased;
            _ = handle.cancelled() => {}
            _ = charring => self.char(),
        }

        // Released or Charred by now, whichever side won the transition
        self.settled.send_replace(Some(self.state()));
    }

    fn char(&self) {
        let charred = self.state.send_if_modified(|state| {
            if *state == CookState::Ready {
                *state = CookState::Charred;
                true
            } else {
                false
            }
        });

        if charred {
            PizzaCharred {
                time_to_release: self.time_to_release,
            }
            .log();
            self.emitter.emit(&PizzaEvent::CharredPizza);
        }
    }

    fn units(&self, count: i64) -> Duration {
        let count = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
        self.time_unit.saturating_mul(count)
    }
}

fn oven_time_for(size: i64) -> i64 {
    BASE_OVEN_TIME.saturating_add(size.saturating_mul(OVEN_TIME_PER_SIZE))
}

fn max_ingredients_for(size: i64) -> i64 {
    size.saturating_mul(INGREDIENTS_PER_SIZE)
}

fn has_room(count: usize, max: i64) -> bool {
    i64::try_from(count).map_or(false, |count| count < max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    fn record(pizza: &Pizza, names: &[EventName]) -> Arc<StdMutex<Vec<String>>> {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        for name in names {
            let sink = Arc::clone(&seen);
            pizza.on(*name, move |event| {
                let entry = match event.ingredient() {
                    Some(ingredient) => format!("{}({})", event.name(), ingredient),
                    None => event.name().to_string(),
                };
                sink.lock().unwrap().push(entry);
            });
        }
        seen
    }

    #[test]
    fn test_derived_values_follow_size() {
        for size in -3..=10 {
            let pizza = Pizza::new(size);
            assert_eq!(pizza.max_ingredients(), 3 * size);
            assert_eq!(pizza.oven_time(), 5 + 2 * size);
            assert_eq!(pizza.time_to_release(), 5);
            assert_eq!(pizza.state(), CookState::Raw);
            assert!(pizza.ingredients().is_empty());
        }
    }

    #[test]
    fn test_derived_values_saturate() {
        let pizza = Pizza::new(i64::MAX);
        assert_eq!(pizza.max_ingredients(), i64::MAX);
        assert_eq!(pizza.oven_time(), i64::MAX);
    }

    #[test]
    fn test_sizes_mapping() {
        assert_eq!(
            Pizza::sizes(),
            [("individual", 1), ("medium", 2), ("familiar", 3)]
        );
    }

    #[test]
    fn test_add_up_to_capacity_then_reject() {
        let pizza = Pizza::new(PizzaSize::Individual);
        let seen = record(
            &pizza,
            &[EventName::IngredientAdded, EventName::MaxIngredientsReached],
        );

        pizza.add("A").unwrap().add("B").unwrap().add("C").unwrap();
        let err = pizza.add("D").unwrap_err();

        assert_eq!(err, PizzaError::MaxIngredientsReached { max: 3 });
        assert_eq!(pizza.ingredients(), vec!["A", "B", "C"]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "ingredientAdded(A)",
                "ingredientAdded(B)",
                "ingredientAdded(C)",
                "maxIngredientsReached",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let pizza = Pizza::new(PizzaSize::Medium);
        pizza.add("Cheese").unwrap().add("Cheese").unwrap();
        assert_eq!(pizza.ingredients(), vec!["Cheese", "Cheese"]);

        pizza.remove("Cheese").unwrap();
        assert_eq!(pizza.ingredients(), vec!["Cheese"]);
    }

    #[test]
    fn test_zero_and_negative_sizes_have_no_room() {
        for size in [0, -1] {
            let pizza = Pizza::new(size);
            let seen = record(&pizza, &[EventName::MaxIngredientsReached]);
            assert!(pizza.add("Tomato").is_err());
            assert!(pizza.ingredients().is_empty());
            assert_eq!(*seen.lock().unwrap(), vec!["maxIngredientsReached"]);
        }
    }

    #[test]
    fn test_remove_missing_ingredient_reports_and_keeps_sequence() {
        let pizza = Pizza::new(PizzaSize::Medium);
        let seen = record(
            &pizza,
            &[EventName::IngredientRemoved, EventName::ErrorRemovingIngredient],
        );
        pizza.add("Pepper").unwrap();

        let err = pizza.remove("Peper").unwrap_err();
        assert_eq!(
            err,
            PizzaError::IngredientNotFound {
                ingredient: "Peper".to_string()
            }
        );
        assert!(pizza.remove("pepper").is_err());
        assert_eq!(pizza.ingredients(), vec!["Pepper"]);

        pizza.remove("Pepper").unwrap();
        assert!(pizza.ingredients().is_empty());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "errorRemovingIngredient(Peper)",
                "errorRemovingIngredient(pepper)",
                "ingredientRemoved(Pepper)",
            ]
        );
    }

    #[test]
    fn test_ingredient_order_after_mixed_operations() {
        let pizza = Pizza::new(PizzaSize::Medium);
        pizza
            .add("A")
            .unwrap()
            .add("B")
            .unwrap()
            .remove("A")
            .unwrap()
            .add("C")
            .unwrap();
        assert_eq!(pizza.ingredients(), vec!["B", "C"]);
    }

    #[test]
    fn test_listener_can_call_back_into_pizza() {
        let pizza = Arc::new(Pizza::new(PizzaSize::Medium));
        let inner = Arc::downgrade(&pizza);
        pizza.on(EventName::IngredientAdded, move |event| {
            if event.ingredient() == Some("Tomato") {
                if let Some(pizza) = inner.upgrade() {
                    let _ = pizza.add("Basil");
                }
            }
        });

        pizza.add("Tomato").unwrap();
        assert_eq!(pizza.ingredients(), vec!["Tomato", "Basil"]);
    }

    #[test]
    fn test_listener_count_tracks_on_and_off() {
        let pizza = Pizza::new(PizzaSize::Medium);
        assert_eq!(pizza.listener_count(EventName::CookFinished), 0);

        let first = pizza.on(EventName::CookFinished, |_| {});
        pizza.try_on(
            EventName::CookFinished,
            |_: &PizzaEvent| -> Result<(), crate::errors::ListenerError> { Ok(()) },
        );
        pizza.on(EventName::CharredPizza, |_| {});
        assert_eq!(pizza.listener_count(EventName::CookFinished), 2);
        assert_eq!(pizza.listener_count(EventName::CharredPizza), 1);

        assert!(pizza.off(EventName::CookFinished, first));
        assert_eq!(pizza.listener_count(EventName::CookFinished), 1);
        assert_eq!(pizza.listener_count(EventName::IngredientAdded), 0);
    }

    #[test]
    fn test_cook_outside_runtime_fails_and_stays_raw() {
        let pizza = Arc::new(Pizza::new(PizzaSize::Medium));
        let seen = record(&pizza, &[EventName::CookStarted]);

        assert_eq!(pizza.cook().unwrap_err(), PizzaError::NoRuntime);
        assert_eq!(pizza.state(), CookState::Raw);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_units_clamp_negative_counts() {
        let pizza = Pizza::with_settings(
            1,
            OvenSettings {
                time_unit: Duration::from_millis(10),
                time_to_release: 5,
            },
        );
        assert_eq!(pizza.units(-4), Duration::ZERO);
        assert_eq!(pizza.units(3), Duration::from_millis(30));
    }
}
