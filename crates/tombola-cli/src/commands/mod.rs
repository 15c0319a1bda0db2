// Subcommand implementations

pub mod play;
pub mod shuffle;
pub mod simulate;

use std::sync::Arc;
use tombola_core::RandomSource;
use tombola_effects::{select_random_source, SeededRandomHandler};

/// Seeded source when a seed is given, otherwise the best system source
pub fn random_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandomHandler::from_u64(seed)),
        None => select_random_source(),
    }
}

/// Render items as a space-separated line
pub fn format_items(items: &[u32]) -> String {
    items
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
