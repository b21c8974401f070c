// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named size presets.
///
/// A pizza can also be built from any raw integer size; the presets are just
/// the sizes the menu offers. Names are matched case-insensitively, in config
/// files as well as through `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum PizzaSize {
    Individual = 1,
    Medium = 2,
    Familiar = 3,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Individual, PizzaSize::Medium, PizzaSize::Familiar];

    pub fn name(&self) -> &'static str {
        match self {
            PizzaSize::Individual => "individual",
            PizzaSize::Medium => "medium",
            PizzaSize::Familiar => "familiar",
        }
    }

    pub fn value(&self) -> i64 {
        *self as i64
    }
}

impl From<PizzaSize> for i64 {
    fn from(size: PizzaSize) -> Self {
        size.value()
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pizza size '{0}' (expected individual, medium or familiar)")]
pub struct UnknownPizzaSize(pub String);

impl FromStr for PizzaSize {
    type Err = UnknownPizzaSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PizzaSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPizzaSize(s.to_string()))
    }
}

impl TryFrom<String> for PizzaSize {
    type Error = UnknownPizzaSize;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(i64::from(PizzaSize::Individual), 1);
        assert_eq!(i64::from(PizzaSize::Medium), 2);
        assert_eq!(i64::from(PizzaSize::Familiar), 3);
    }

    #[test]
    fn test_parse_preset_names() {
        assert_eq!("medium".parse::<PizzaSize>(), Ok(PizzaSize::Medium));
        assert_eq!("Familiar".parse::<PizzaSize>(), Ok(PizzaSize::Familiar));
        assert!("large".parse::<PizzaSize>().is_err());
    }
}
