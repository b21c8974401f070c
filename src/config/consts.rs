use std::time::Duration;

/// Oven time every pizza needs regardless of size, in time units
pub const BASE_OVEN_TIME: i64 = 5;
/// Extra oven time per size step, in time units
pub const OVEN_TIME_PER_SIZE: i64 = 2;
/// Ingredient capacity per size step
pub const INGREDIENTS_PER_SIZE: i64 = 3;
/// Grace window between ready and charred, in time units
pub const DEFAULT_TIME_TO_RELEASE: i64 = 5;
/// Length of one time unit on the tokio clock
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_millis(1);
pub const DEFAULT_TIME_UNIT_MS: u64 = 1;
/// Longest time unit a config file may ask for (one minute)
pub const MAX_TIME_UNIT_MS: u64 = 60_000;
