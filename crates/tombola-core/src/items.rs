//! Item set helpers and game constants

use crate::{Result, TombolaError};

/// Number of tokens in a standard game
pub const DEFAULT_ITEM_COUNT: usize = 90;

/// Default head/tail window checked for repetition between sessions
pub const DEFAULT_AVOID_COUNT: usize = 5;

/// Default largest tolerated overlap inside the window
pub const DEFAULT_MAX_OVERLAP: usize = 2;

/// Build the item set `1..=count`
pub fn item_set(count: usize) -> Result<Vec<u32>> {
    if count == 0 {
        return Err(TombolaError::invalid_argument(
            "item set must contain at least one item",
        ));
    }
    let last = u32::try_from(count).map_err(|_| {
        TombolaError::invalid_argument(format!("item set of {count} items exceeds u32 range"))
    })?;
    Ok((1..=last).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_item_set_is_one_through_ninety() {
        let items = item_set(DEFAULT_ITEM_COUNT).unwrap();
        assert_eq!(items.len(), 90);
        assert_eq!(items.first(), Some(&1));
        assert_eq!(items.last(), Some(&90));
    }

    #[test]
    fn empty_item_set_is_rejected() {
        assert!(matches!(
            item_set(0),
            Err(TombolaError::InvalidArgument { .. })
        ));
    }
}
