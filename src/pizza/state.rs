// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Where a pizza is in its cooking lifecycle.
///
/// ```text
/// Raw --cook--> Baking --oven timer--> Ready --release--> Released
///                                        |
///                                        +--charring timer--> Charred
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CookState {
    #[default]
    Raw,
    Baking,
    /// Out of the oven, charring timer running.
    Ready,
    Released,
    Charred,
}

impl CookState {
    /// `Released` and `Charred` end the lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CookState::Released | CookState::Charred)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CookState::Raw => "raw",
            CookState::Baking => "baking",
            CookState::Ready => "ready",
            CookState::Released => "released",
            CookState::Charred => "charred",
        }
    }
}

impl fmt::Display for CookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
