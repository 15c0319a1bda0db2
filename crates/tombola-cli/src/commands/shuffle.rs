// One-off permutation of the item set

use super::{format_items, random_source};
use tombola_core::{item_set, SessionConfig};
use tombola_sequencer::DrawSequencer;
use tracing::debug;

/// Print a single permutation of `1..=count`
pub fn run(config: &SessionConfig, count: Option<usize>, seed: Option<u64>) -> anyhow::Result<()> {
    let count = count.unwrap_or(config.sequencer.item_count);
    let items = item_set(count)?;

    let sequencer = DrawSequencer::with_defaults(random_source(seed));
    debug!(count, source = %sequencer.random_source().kind(), "shuffling item set");

    println!("{}", format_items(&sequencer.generate_permutation(&items)));
    Ok(())
}
