//! Deterministic random sources for tests
//!
//! - [`ScriptedRandomSource`] replays a fixed list of raw values, so a test can
//!   dictate every Fisher-Yates swap
//! - [`CountingRandomSource`] wraps any source and counts draws
//! - [`deterministic_source`] / [`seeded_source`] build seeded ChaCha20 handlers

use std::sync::atomic::{AtomicUsize, Ordering};
use tombola_core::{RandomSource, RandomSourceKind};
use tombola_effects::SeededRandomHandler;

/// Seeded handler with the fixed test seed `[42; 32]`
pub fn deterministic_source() -> SeededRandomHandler {
    SeededRandomHandler::deterministic()
}

/// Seeded handler for a specific numeric seed
pub fn seeded_source(seed: u64) -> SeededRandomHandler {
    SeededRandomHandler::from_u64(seed)
}

/// Replays a fixed script of `u32` values, wrapping around at the end
///
/// With the default modulo reduction a script value `v` requested for bound
/// `max` yields index `v % max`, so scripting `i` at the step for position `i`
/// leaves that position in place.
#[derive(Debug, Default)]
pub struct ScriptedRandomSource {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl ScriptedRandomSource {
    /// Create a source replaying `values`
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Script that makes Fisher-Yates return `n` items in their input order
    pub fn identity(n: usize) -> Self {
        Self::new((1..n).rev().map(|i| i as u32).collect::<Vec<_>>())
    }

    /// Values consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_u32(&self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let position = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.values[position % self.values.len()]
    }

    fn kind(&self) -> RandomSourceKind {
        RandomSourceKind::Deterministic
    }
}

/// Wraps a source and counts `random_index` and `next_u32` calls
#[derive(Debug)]
pub struct CountingRandomSource<R> {
    inner: R,
    draws: AtomicUsize,
}

impl<R: RandomSource> CountingRandomSource<R> {
    /// Wrap `inner`
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            draws: AtomicUsize::new(0),
        }
    }

    /// Number of draws since construction or the last [`Self::reset_count`]
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }

    /// Zero the draw counter
    pub fn reset_count(&self) {
        self.draws.store(0, Ordering::SeqCst);
    }
}

impl<R: RandomSource> RandomSource for CountingRandomSource<R> {
    fn next_u32(&self) -> u32 {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.inner.next_u32()
    }

    fn random_index(&self, max: usize) -> usize {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.inner.random_index(max)
    }

    fn kind(&self) -> RandomSourceKind {
        self.inner.kind()
    }
}
