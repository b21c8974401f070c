// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::MAX_TIME_UNIT_MS;
use crate::config::PizzeriaConfig;

/// Check a loaded config for values the oven cannot work with.
///
/// The pizza size is deliberately not checked; any integer makes a pizza.
pub fn validate_config(cfg: &PizzeriaConfig) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if cfg.oven.time_unit_ms == 0 {
        problems.push("oven.time_unit_ms must be at least 1".to_string());
    } else if cfg.oven.time_unit_ms > MAX_TIME_UNIT_MS {
        problems.push(format!(
            "oven.time_unit_ms must be at most {} (got {})",
            MAX_TIME_UNIT_MS, cfg.oven.time_unit_ms
        ));
    }

    if cfg.oven.time_to_release < 0 {
        problems.push(format!(
            "oven.time_to_release must not be negative (got {})",
            cfg.oven.time_to_release
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
