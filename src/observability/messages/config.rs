// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Config file parsed and validated.
///
/// # Log Level
/// `info!` - Startup event
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub format: &'a str,
    pub steps: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} config '{}' with {} steps",
            self.format,
            self.path.display(),
            self.steps
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            format = self.format,
            steps = self.steps,
            "{}", self
        );
    }
}

/// Config file parsed but failed validation.
///
/// # Log Level
/// `error!` - Startup failure
pub struct ConfigRejected<'a> {
    pub path: &'a Path,
    pub problems: &'a [String],
}

impl Display for ConfigRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Config '{}' rejected: {}",
            self.path.display(),
            self.problems.join("; ")
        )
    }
}

impl StructuredLog for ConfigRejected<'_> {
    fn log(&self) {
        tracing::error!(
            path = %self.path.display(),
            problem_count = self.problems.len(),
            "{}", self
        );
    }
}
