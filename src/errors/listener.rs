// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure raised by (or caught around) a single listener invocation.
///
/// The emitter never propagates these; they are logged and collected into the
/// dispatch report so that later listeners still run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("listener failed: {0}")]
    Failed(String),

    #[error("listener panicked: {0}")]
    Panicked(String),
}

impl ListenerError {
    pub fn failed(reason: impl Into<String>) -> Self {
        ListenerError::Failed(reason.into())
    }
}
