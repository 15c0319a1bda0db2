//! Common inputs for the 90-token game

use tombola_core::{item_set, DEFAULT_ITEM_COUNT};

/// Item set `1..=90`
pub fn standard_items() -> Vec<u32> {
    item_set(DEFAULT_ITEM_COUNT).unwrap_or_default()
}

/// Closing five draws of a hypothetical previous game
pub fn wraparound_tail() -> Vec<u32> {
    vec![88, 89, 90, 1, 2]
}

/// Complete previous game drawn in ascending order
pub fn ascending_history() -> Vec<u32> {
    standard_items()
}
