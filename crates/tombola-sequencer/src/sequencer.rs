//! Draw-order generation
//!
//! [`DrawSequencer`] owns a [`RandomSource`] and a [`SequencerConfig`] and
//! exposes the two generation operations: a plain Fisher-Yates permutation and
//! the anti-repetition session sequence built on top of it. Both are pure with
//! respect to their inputs; every call works on its own copy and its own retry
//! counter.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tombola_core::{item_set, RandomSource, Result, SequencerConfig, TombolaError};
use tombola_effects::select_random_source;
use tracing::{debug, warn};

/// Counters describing how a session sequence was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationStats {
    /// Number of permutations drawn, including the accepted one
    pub attempts: u32,
    /// Overlap between the returned head and the previous tail
    pub overlap: usize,
    /// The retry cap was hit and the first candidate was returned
    pub capped: bool,
}

/// A generated session draw order together with its generation counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSequence<T> {
    /// Complete draw order for the session
    pub items: Vec<T>,
    /// How the draw order was produced
    pub stats: GenerationStats,
}

impl<T> SessionSequence<T> {
    /// Discard the counters and keep the draw order
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Generation counters without the draw order
    pub fn stats(&self) -> GenerationStats {
        self.stats
    }
}

/// Last `window` items of `previous_tail`, or all of it when shorter
pub fn tail_window<T>(previous_tail: &[T], window: usize) -> &[T] {
    &previous_tail[previous_tail.len().saturating_sub(window)..]
}

/// Number of `head` items that also appear anywhere in `tail`
pub fn overlap_count<T: Eq + Hash>(head: &[T], tail: &[T]) -> usize {
    let tail: HashSet<&T> = tail.iter().collect();
    head.iter().filter(|item| tail.contains(item)).count()
}

fn validate_session_inputs<T: Eq + Hash>(items: &[T], avoid_count: usize) -> Result<()> {
    if avoid_count == 0 {
        return Err(TombolaError::invalid_argument(
            "avoid_count must be at least 1",
        ));
    }
    if avoid_count >= items.len() {
        return Err(TombolaError::invalid_argument(format!(
            "avoid_count ({avoid_count}) must be smaller than the item set ({})",
            items.len()
        )));
    }
    let mut seen = HashSet::with_capacity(items.len());
    if !items.iter().all(|item| seen.insert(item)) {
        return Err(TombolaError::invalid_argument(
            "item set contains duplicate elements",
        ));
    }
    Ok(())
}

/// Generator of random draw orders
#[derive(Clone)]
pub struct DrawSequencer<R = Arc<dyn RandomSource>> {
    random: R,
    config: SequencerConfig,
}

impl<R: RandomSource> fmt::Debug for DrawSequencer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawSequencer")
            .field("random", &self.random.kind())
            .field("config", &self.config)
            .finish()
    }
}

impl DrawSequencer {
    /// Create a sequencer over the best entropy source available on this host
    pub fn from_system(config: SequencerConfig) -> Result<Self> {
        Self::new(select_random_source(), config)
    }
}

impl<R: RandomSource> DrawSequencer<R> {
    /// Create a sequencer with validated configuration
    pub fn new(random: R, config: SequencerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { random, config })
    }

    /// Create a sequencer with the default 90-item configuration
    pub fn with_defaults(random: R) -> Self {
        Self {
            random,
            config: SequencerConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Entropy source used for every shuffle
    pub fn random_source(&self) -> &R {
        &self.random
    }

    /// Uniformly random ordering of `items`
    ///
    /// Fisher-Yates over a working copy: for `i` from `n - 1` down to `1`,
    /// swap position `i` with a random position in `0..=i`. Uses exactly
    /// `n - 1` draws from the random source and leaves `items` untouched.
    pub fn generate_permutation<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut working = items.to_vec();
        for i in (1..working.len()).rev() {
            let j = self.random.random_index(i + 1);
            debug_assert!(j <= i, "random source returned {j} for bound {}", i + 1);
            working.swap(i, j);
        }
        working
    }

    /// Random ordering of the configured item set `1..=item_count`
    pub fn shuffled_item_set(&self) -> Result<Vec<u32>> {
        Ok(self.generate_permutation(&item_set(self.config.item_count)?))
    }

    /// Draw order for a new session that does not echo the previous one
    ///
    /// See [`DrawSequencer::generate_session_sequence_with_report`].
    pub fn generate_session_sequence<T: Clone + Eq + Hash>(
        &self,
        items: &[T],
        previous_tail: &[T],
        avoid_count: usize,
    ) -> Result<Vec<T>> {
        self.generate_session_sequence_with_report(items, previous_tail, avoid_count)
            .map(SessionSequence::into_items)
    }

    /// Draw order for a new session, with generation counters
    ///
    /// An empty `previous_tail` accepts the first permutation unchecked.
    /// Otherwise a candidate is rejected and reshuffled while more than
    /// `max_overlap` of its first `avoid_count` items appear among the last
    /// `avoid_count` items of `previous_tail`. With `max_attempts` set, the
    /// first candidate is returned once the cap is reached.
    ///
    /// The threshold is the configured `max_overlap`, but the window is the
    /// `avoid_count` argument. A window no larger than `max_overlap` can never
    /// exceed the threshold, so the first permutation is always accepted.
    /// [`DrawSequencer::next_session`] uses the configured window, which
    /// validation keeps larger than the threshold.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `avoid_count` is zero, when it is not smaller
    /// than `items.len()`, or when `items` contains duplicates.
    pub fn generate_session_sequence_with_report<T: Clone + Eq + Hash>(
        &self,
        items: &[T],
        previous_tail: &[T],
        avoid_count: usize,
    ) -> Result<SessionSequence<T>> {
        validate_session_inputs(items, avoid_count)?;

        let first = self.generate_permutation(items);
        if previous_tail.is_empty() {
            return Ok(SessionSequence {
                items: first,
                stats: GenerationStats {
                    attempts: 1,
                    overlap: 0,
                    capped: false,
                },
            });
        }

        let prior_tail = tail_window(previous_tail, avoid_count);
        let max_overlap = self.config.max_overlap;
        if avoid_count <= max_overlap {
            debug!(
                avoid_count,
                max_overlap, "window cannot exceed overlap threshold; check disabled"
            );
        }

        let first_overlap = overlap_count(&first[..avoid_count], prior_tail);
        if first_overlap <= max_overlap {
            return Ok(SessionSequence {
                items: first,
                stats: GenerationStats {
                    attempts: 1,
                    overlap: first_overlap,
                    capped: false,
                },
            });
        }

        let mut attempts: u32 = 1;
        let mut overlap = first_overlap;
        loop {
            debug!(
                attempt = attempts,
                overlap, max_overlap, "candidate echoes previous session tail; reshuffling"
            );

            if self.config.max_attempts.is_some_and(|cap| attempts >= cap) {
                warn!(
                    attempts,
                    overlap = first_overlap,
                    "retry cap reached; keeping first candidate"
                );
                return Ok(SessionSequence {
                    items: first,
                    stats: GenerationStats {
                        attempts,
                        overlap: first_overlap,
                        capped: true,
                    },
                });
            }

            attempts = attempts.saturating_add(1);
            let candidate = self.generate_permutation(items);
            overlap = overlap_count(&candidate[..avoid_count], prior_tail);
            if overlap <= max_overlap {
                return Ok(SessionSequence {
                    items: candidate,
                    stats: GenerationStats {
                        attempts,
                        overlap,
                        capped: false,
                    },
                });
            }
        }
    }

    /// Session sequence over the configured item set and window
    pub fn next_session(&self, previous_tail: &[u32]) -> Result<SessionSequence<u32>> {
        let items = item_set(self.config.item_count)?;
        self.generate_session_sequence_with_report(&items, previous_tail, self.config.avoid_count)
    }
}
