//! Draw-state holder for a single game
//!
//! A [`DrawSession`] keeps the remaining draw order and the append-only history
//! of what has been drawn. It is the explicit owner of state that a UI would
//! otherwise keep in ambient globals: one controller owns the session and
//! calls [`DrawSession::draw_next`], [`DrawSession::reset`] and
//! [`DrawSession::abandon`].

use crate::sequencer::{DrawSequencer, GenerationStats, SessionSequence};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tombola_core::{item_set, RandomSource, Result};
use tracing::{info, trace};

/// One game's worth of draws over the configured item set
pub struct DrawSession<R = Arc<dyn RandomSource>> {
    sequencer: DrawSequencer<R>,
    items: Vec<u32>,
    remaining: VecDeque<u32>,
    history: Vec<u32>,
    previous_tail: Vec<u32>,
    stats: GenerationStats,
}

impl<R: RandomSource> fmt::Debug for DrawSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawSession")
            .field("sequencer", &self.sequencer)
            .field("remaining", &self.remaining.len())
            .field("history", &self.history)
            .field("previous_tail", &self.previous_tail.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<R: RandomSource> DrawSession<R> {
    /// Start a session whose opening avoids echoing `previous_tail`
    ///
    /// `previous_tail` is the chronological draw history of the prior session,
    /// or empty for the first game.
    pub fn start(sequencer: DrawSequencer<R>, previous_tail: Vec<u32>) -> Result<Self> {
        let items = item_set(sequencer.config().item_count)?;
        let mut session = Self {
            sequencer,
            items,
            remaining: VecDeque::new(),
            history: Vec::new(),
            previous_tail,
            stats: GenerationStats::default(),
        };
        let sequence = session.deal(&session.previous_tail)?;
        session.commit(sequence);
        Ok(session)
    }

    fn deal(&self, previous_tail: &[u32]) -> Result<SessionSequence<u32>> {
        self.sequencer.generate_session_sequence_with_report(
            &self.items,
            previous_tail,
            self.sequencer.config().avoid_count,
        )
    }

    fn commit(&mut self, sequence: SessionSequence<u32>) {
        self.stats = sequence.stats();
        info!(
            items = sequence.items.len(),
            attempts = self.stats.attempts,
            overlap = self.stats.overlap,
            capped = self.stats.capped,
            "new draw session"
        );
        self.remaining = sequence.items.into();
        self.history = Vec::with_capacity(self.items.len());
    }

    /// Draw the next item, or `None` once every item has been drawn
    pub fn draw_next(&mut self) -> Option<u32> {
        let item = self.remaining.pop_front()?;
        self.history.push(item);
        trace!(item, remaining = self.remaining.len(), "drew item");
        Some(item)
    }

    /// Finish this session and start the next one
    ///
    /// The history drawn so far becomes the previous tail for the new draw
    /// order. Resetting before any draw records an empty tail, so the next
    /// order is accepted without an overlap check.
    pub fn reset(&mut self) -> Result<()> {
        let sequence = self.deal(&self.history)?;
        self.previous_tail = std::mem::take(&mut self.history);
        self.commit(sequence);
        Ok(())
    }

    /// Discard this session without recording it and start over
    ///
    /// The previous tail is left as it was, so the new order is still checked
    /// against the last finished session.
    pub fn abandon(&mut self) -> Result<()> {
        let sequence = self.deal(&self.previous_tail)?;
        self.commit(sequence);
        Ok(())
    }

    /// Items not yet drawn
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Items drawn so far
    pub fn drawn_count(&self) -> usize {
        self.history.len()
    }

    /// Every item has been drawn
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Most recently drawn item
    pub fn current(&self) -> Option<u32> {
        self.history.last().copied()
    }

    /// Draw history in draw order
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Up to `count` most recent draws, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = u32> + '_ {
        self.history.iter().rev().take(count).copied()
    }

    /// History of the last finished session used as the repetition reference
    pub fn previous_tail(&self) -> &[u32] {
        &self.previous_tail
    }

    /// Counters from generating the current draw order
    pub fn generation_stats(&self) -> GenerationStats {
        self.stats
    }

    /// Sequencer backing this session
    pub fn sequencer(&self) -> &DrawSequencer<R> {
        &self.sequencer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tombola_core::SequencerConfig;
    use tombola_effects::SeededRandomHandler;

    fn small_session() -> DrawSession<SeededRandomHandler> {
        let config = SequencerConfig {
            item_count: 10,
            avoid_count: 3,
            max_overlap: 1,
            max_attempts: None,
        };
        let sequencer = DrawSequencer::new(SeededRandomHandler::from_u64(11), config).unwrap();
        DrawSession::start(sequencer, Vec::new()).unwrap()
    }

    #[test]
    fn fresh_session_has_nothing_drawn() {
        let session = small_session();
        assert_eq!(session.remaining_count(), 10);
        assert_eq!(session.drawn_count(), 0);
        assert_eq!(session.current(), None);
        assert!(!session.is_complete());
        assert_eq!(session.generation_stats().attempts, 1);
    }

    #[test]
    fn draws_move_items_into_history() {
        let mut session = small_session();
        let first = session.draw_next().unwrap();
        let second = session.draw_next().unwrap();

        assert_eq!(session.history(), &[first, second]);
        assert_eq!(session.current(), Some(second));
        assert_eq!(session.recent(5).collect::<Vec<_>>(), vec![second, first]);
        assert_eq!(session.remaining_count(), 8);
    }

    #[test]
    fn exhausted_session_returns_none() {
        let mut session = small_session();
        while session.draw_next().is_some() {}
        assert!(session.is_complete());
        assert_eq!(session.draw_next(), None);
        assert_eq!(session.drawn_count(), 10);
    }

    #[test]
    fn reset_records_history_as_previous_tail() {
        let mut session = small_session();
        let drawn: Vec<u32> = (0..4).filter_map(|_| session.draw_next()).collect();

        session.reset().unwrap();

        assert_eq!(session.previous_tail(), drawn.as_slice());
        assert_eq!(session.drawn_count(), 0);
        assert_eq!(session.remaining_count(), 10);
    }

    #[test]
    fn abandon_keeps_previous_tail() {
        let mut session = small_session();
        while session.draw_next().is_some() {}
        session.reset().unwrap();
        let recorded = session.previous_tail().to_vec();

        session.draw_next();
        session.draw_next();
        session.abandon().unwrap();

        assert_eq!(session.previous_tail(), recorded.as_slice());
        assert_eq!(session.drawn_count(), 0);
        assert_eq!(session.remaining_count(), 10);
    }
}
