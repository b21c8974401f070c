// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::sync::Arc;
use the_pizzeria::config::{load_and_validate_config, PizzeriaConfig};
use the_pizzeria::events::EventName;
use the_pizzeria::pizza::{CookState, OvenSettings, Pizza};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.yaml|config.toml]", args[0]);
        eprintln!("Example: {} configs/medium-pizza.yaml", args[0]);
        eprintln!("Without a config file the classic medium pizza order is cooked.");
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load pizzeria config {}", path))?,
        None => PizzeriaConfig::default(),
    };

    let outcome = cook_order(&config).await?;
    if outcome == CookState::Charred {
        std::process::exit(2);
    }
    Ok(())
}

/// Build the pizza, apply every step, cook it and wait for the outcome.
async fn cook_order(config: &PizzeriaConfig) -> anyhow::Result<CookState> {
    let pizza = Arc::new(Pizza::with_settings(
        config.size.value(),
        OvenSettings::from(&config.oven),
    ));

    println!("🍕 Pizzeria");
    println!("═══════════");
    println!(
        "Size: {} | Max ingredients: {} | Oven time: {} | Release window: {} ({}ms per unit)",
        pizza.size(),
        pizza.max_ingredients(),
        pizza.oven_time(),
        pizza.time_to_release(),
        config.oven.time_unit_ms
    );
    println!();

    attach_console_listeners(&pizza, config.release_on_finish);

    let mut failed = 0;
    for step in &config.steps {
        if step.apply(&pizza).is_err() {
            failed += 1;
        }
    }
    if failed > 0 {
        println!("⚠️  {} of {} steps could not be applied", failed, config.steps.len());
    }

    pizza.cook().context("Failed to start the oven")?;
    let outcome = pizza.done().await;

    println!();
    println!("Ingredients: {}", pizza.ingredients().join(", "));
    println!("Outcome: {}", outcome);
    Ok(outcome)
}

/// One console line per event, in the words a cook would use.
fn attach_console_listeners(pizza: &Pizza, release_on_finish: bool) {
    let max = pizza.max_ingredients();

    pizza.on(EventName::IngredientAdded, |event| {
        if let Some(ingredient) = event.ingredient() {
            println!("{} added", ingredient);
        }
    });
    pizza.on(EventName::MaxIngredientsReached, move |_| {
        println!("Max ingredients ({}) reached", max);
    });
    pizza.on(EventName::IngredientRemoved, |event| {
        if let Some(ingredient) = event.ingredient() {
            println!("{} removed", ingredient);
        }
    });
    pizza.on(EventName::ErrorRemovingIngredient, |event| {
        if let Some(ingredient) = event.ingredient() {
            println!("Cannot remove {} because it is not on the pizza", ingredient);
        }
    });
    pizza.on(EventName::CookStarted, |_| println!("Pizza is in the oven."));
    pizza.on(EventName::CookFinished, move |event| {
        println!("Pizza is ready to release.");
        let Some(handle) = event.release_handle() else {
            return;
        };
        if !release_on_finish {
            println!("Nobody is watching the oven...");
            return;
        }
        match handle.release() {
            Ok(()) => println!("Pizza was released!"),
            Err(e) => println!("Too late: {}", e),
        }
    });
    pizza.on(EventName::CharredPizza, |_| {
        println!("🔥 The pizza was left in the oven too long and is charred.");
    });
}
