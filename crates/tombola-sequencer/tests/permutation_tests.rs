//! Permutation Generator Tests
//!
//! Validity, non-mutation, draw budget and reproducibility of the
//! Fisher-Yates permutation.

use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};
use tombola_effects::{select_random_source, SeededRandomHandler};
use tombola_sequencer::DrawSequencer;
use tombola_testkit::strategies::{arb_item_set, arb_seed};
use tombola_testkit::{
    deterministic_source, seeded_source, standard_items, CountingRandomSource,
    ScriptedRandomSource,
};

// ============================================================================
// Validity
// ============================================================================

proptest! {
    #[test]
    fn permutation_contains_every_item_once(items in arb_item_set(0..=200), seed in arb_seed()) {
        let sequencer = DrawSequencer::with_defaults(seeded_source(seed));
        let shuffled = sequencer.generate_permutation(&items);

        prop_assert_eq!(shuffled.len(), items.len());
        let unique: BTreeSet<u32> = shuffled.iter().copied().collect();
        prop_assert_eq!(unique.len(), items.len());
        prop_assert_eq!(unique, items.iter().copied().collect::<BTreeSet<u32>>());
    }

    #[test]
    fn permutation_preserves_multiset_of_repeated_elements(seed in arb_seed()) {
        let sequencer = DrawSequencer::with_defaults(seeded_source(seed));
        let items = vec!['a', 'b', 'b', 'c', 'c', 'c'];
        let mut shuffled = sequencer.generate_permutation(&items);
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, items);
    }
}

#[test]
fn empty_and_single_inputs_are_returned_unchanged() {
    let source = CountingRandomSource::new(deterministic_source());
    let sequencer = DrawSequencer::with_defaults(&source);

    assert_eq!(sequencer.generate_permutation::<u32>(&[]), Vec::<u32>::new());
    assert_eq!(sequencer.generate_permutation(&[42u32]), vec![42]);
    assert_eq!(source.draws(), 0);
}

#[test]
fn input_is_not_mutated() {
    let sequencer = DrawSequencer::with_defaults(deterministic_source());
    let items = standard_items();
    let snapshot = items.clone();

    let shuffled = sequencer.generate_permutation(&items);

    assert_eq!(items, snapshot);
    assert_ne!(shuffled, snapshot);
}

#[test]
fn uses_exactly_n_minus_one_draws() {
    let source = CountingRandomSource::new(deterministic_source());
    let sequencer = DrawSequencer::with_defaults(&source);

    sequencer.generate_permutation(&standard_items());
    assert_eq!(source.draws(), 89);

    source.reset_count();
    sequencer.generate_permutation(&[1u32, 2]);
    assert_eq!(source.draws(), 1);
}

// ============================================================================
// Scripted swaps
// ============================================================================

#[test]
fn identity_script_keeps_input_order() {
    let sequencer = DrawSequencer::with_defaults(ScriptedRandomSource::identity(6));
    let items = [1u32, 2, 3, 4, 5, 6];
    assert_eq!(sequencer.generate_permutation(&items), items.to_vec());
}

#[test]
fn zero_script_rotates_through_front_swaps() {
    // i = 3: [4,2,3,1]; i = 2: [3,2,4,1]; i = 1: [2,3,4,1]
    let sequencer = DrawSequencer::with_defaults(ScriptedRandomSource::new(vec![0]));
    assert_eq!(
        sequencer.generate_permutation(&[1u32, 2, 3, 4]),
        vec![2, 3, 4, 1]
    );
}

#[test]
fn every_ordering_of_three_items_is_reachable() {
    let mut seen = HashSet::new();
    for a in 0..3u32 {
        for b in 0..2u32 {
            let sequencer = DrawSequencer::with_defaults(ScriptedRandomSource::new(vec![a, b]));
            seen.insert(sequencer.generate_permutation(&[1u32, 2, 3]));
        }
    }
    assert_eq!(seen.len(), 6);
}

// ============================================================================
// Reproducibility and spread
// ============================================================================

#[test]
fn same_seed_reproduces_same_permutation() {
    let left = DrawSequencer::with_defaults(SeededRandomHandler::from_u64(2024));
    let right = DrawSequencer::with_defaults(SeededRandomHandler::from_u64(2024));
    let items = standard_items();

    for _ in 0..10 {
        assert_eq!(
            left.generate_permutation(&items),
            right.generate_permutation(&items)
        );
    }
}

#[test]
fn system_source_never_repeats_a_permutation_in_a_thousand_runs() {
    let sequencer = DrawSequencer::with_defaults(select_random_source());
    let items = standard_items();

    let distinct: HashSet<Vec<u32>> = (0..1000)
        .map(|_| sequencer.generate_permutation(&items))
        .collect();
    assert_eq!(distinct.len(), 1000);
}

#[test]
fn shuffled_item_set_covers_configured_range() {
    let sequencer = DrawSequencer::with_defaults(deterministic_source());
    let mut shuffled = sequencer.shuffled_item_set().unwrap();
    shuffled.sort_unstable();
    assert_eq!(shuffled, standard_items());
}
