//! Draw Session Tests
//!
//! End-to-end behaviour of the draw-state holder across consecutive games.

use std::collections::BTreeSet;
use tombola_core::SequencerConfig;
use tombola_sequencer::{overlap_count, tail_window, DrawSequencer, DrawSession};
use tombola_testkit::{seeded_source, standard_items, wraparound_tail, ScriptedRandomSource};

#[test]
fn draining_a_session_yields_each_item_once_in_generated_order() {
    let sequencer = DrawSequencer::with_defaults(seeded_source(90));
    let expected = DrawSequencer::with_defaults(seeded_source(90))
        .generate_session_sequence(&standard_items(), &[], 5)
        .unwrap();

    let mut session = DrawSession::start(sequencer, Vec::new()).unwrap();
    let mut drawn = Vec::new();
    while let Some(item) = session.draw_next() {
        drawn.push(item);
        assert_eq!(session.remaining_count(), 90 - drawn.len());
    }

    assert_eq!(drawn.len(), 90);
    assert_eq!(drawn, expected);
    assert_eq!(drawn.iter().copied().collect::<BTreeSet<u32>>().len(), 90);
    assert_eq!(session.history(), drawn.as_slice());
    assert!(session.is_complete());
}

#[test]
fn consecutive_sessions_respect_overlap_rule() {
    let sequencer = DrawSequencer::with_defaults(seeded_source(3));
    let mut session = DrawSession::start(sequencer, Vec::new()).unwrap();

    for _ in 0..50 {
        while session.draw_next().is_some() {}
        session.reset().unwrap();

        let previous = session.previous_tail().to_vec();
        assert_eq!(previous.len(), 90);

        let mut opening = Vec::new();
        for _ in 0..5 {
            opening.extend(session.draw_next());
        }
        let overlap = overlap_count(&opening, tail_window(&previous, 5));
        assert!(overlap <= 2);
        assert_eq!(session.generation_stats().overlap, overlap);
    }
}

#[test]
fn session_started_from_known_tail_avoids_it() {
    let previous_tail = wraparound_tail();
    for seed in 0..100 {
        let sequencer = DrawSequencer::with_defaults(seeded_source(seed));
        let mut session = DrawSession::start(sequencer, previous_tail.clone()).unwrap();

        let opening: Vec<u32> = (0..5).filter_map(|_| session.draw_next()).collect();
        assert!(overlap_count(&opening, &previous_tail) <= 2);
    }
}

#[test]
fn partial_session_reset_compares_against_partial_history() {
    let config = SequencerConfig {
        item_count: 6,
        avoid_count: 3,
        ..SequencerConfig::default()
    };
    // Game one: identity order. Game two: identity rejected against [1, 2, 3],
    // all-zero swaps accepted as [2, 3, 4, 5, 6, 1].
    let source = ScriptedRandomSource::new(vec![5, 4, 3, 2, 1, 5, 4, 3, 2, 1, 0, 0, 0, 0, 0]);
    let sequencer = DrawSequencer::new(source, config).unwrap();
    let mut session = DrawSession::start(sequencer, Vec::new()).unwrap();

    assert_eq!(session.draw_next(), Some(1));
    assert_eq!(session.draw_next(), Some(2));
    assert_eq!(session.draw_next(), Some(3));
    session.reset().unwrap();

    assert_eq!(session.previous_tail(), &[1, 2, 3]);
    assert_eq!(session.generation_stats().attempts, 2);
    let drawn: Vec<u32> = std::iter::from_fn(|| session.draw_next()).collect();
    assert_eq!(drawn, vec![2, 3, 4, 5, 6, 1]);
}

#[test]
fn system_backed_session_runs_to_completion() {
    let sequencer = DrawSequencer::from_system(SequencerConfig::default()).unwrap();
    let mut session = DrawSession::start(sequencer, wraparound_tail()).unwrap();

    let drawn: Vec<u32> = std::iter::from_fn(|| session.draw_next()).collect();
    let mut sorted = drawn.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, standard_items());
    let newest_first: Vec<u32> = drawn.iter().rev().take(3).copied().collect();
    assert_eq!(session.recent(3).collect::<Vec<_>>(), newest_first);
}
