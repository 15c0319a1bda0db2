//! Property test strategies for draw-order inputs
//!
//! # Example
//!
//! ```rust
//! use proptest::prelude::*;
//! use tombola_testkit::strategies::arb_item_set;
//!
//! proptest! {
//!     #[test]
//!     fn items_are_one_based(items in arb_item_set(0..=20)) {
//!         prop_assert!(items.iter().all(|&item| item >= 1));
//!     }
//! }
//! ```

use proptest::prelude::*;
use std::ops::RangeInclusive;

// Re-export proptest for convenience
pub use proptest;

/// Item set `1..=n` for `n` drawn from `sizes`
pub fn arb_item_set(sizes: RangeInclusive<usize>) -> impl Strategy<Value = Vec<u32>> {
    sizes.prop_map(|n| (1..=n as u32).collect())
}

/// Previous-session history over `1..=item_count`: distinct items in random
/// order, `len` items long
pub fn arb_previous_tail(
    item_count: usize,
    len: RangeInclusive<usize>,
) -> impl Strategy<Value = Vec<u32>> {
    let all: Vec<u32> = (1..=item_count as u32).collect();
    (Just(all).prop_shuffle(), len).prop_map(|(shuffled, len)| {
        shuffled.into_iter().take(len).collect()
    })
}

/// Numeric seed for [`crate::seeded_source`]
pub fn arb_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
