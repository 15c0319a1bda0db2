//! Random effect trait
//!
//! `RandomSource` is the single capability the draw sequencer needs from its
//! environment: an index in `[0, max)`. Production handlers live in
//! `tombola-effects`; deterministic handlers for tests live in
//! `tombola-testkit`.
//!
//! Unlike most effect traits this one is synchronous. Generating a draw order
//! never waits on I/O, so callers can shuffle from inside a UI tick or a timer
//! callback without an executor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which kind of entropy a source draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomSourceKind {
    /// Operating system cryptographic entropy
    Secure,
    /// General-purpose pseudorandom generator used when OS entropy is unavailable
    Default,
    /// Seeded or scripted generator with reproducible output
    Deterministic,
}

impl fmt::Display for RandomSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secure => write!(f, "secure"),
            Self::Default => write!(f, "default"),
            Self::Deterministic => write!(f, "deterministic"),
        }
    }
}

/// Source of uniformly distributed random indices
pub trait RandomSource: Send + Sync {
    /// Draw a 32-bit unsigned random value
    fn next_u32(&self) -> u32;

    /// Draw an index in `[0, max)`
    ///
    /// The default reduces a 32-bit sample modulo `max`. For bounds up to 90
    /// the resulting bias is below 1 part in 2^25. Returns `0` when `max` is
    /// zero.
    fn random_index(&self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (u64::from(self.next_u32()) % max as u64) as usize
    }

    /// The kind of entropy backing this source
    fn kind(&self) -> RandomSourceKind;
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }

    fn random_index(&self, max: usize) -> usize {
        (**self).random_index(max)
    }

    fn kind(&self) -> RandomSourceKind {
        (**self).kind()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }

    fn random_index(&self, max: usize) -> usize {
        (**self).random_index(max)
    }

    fn kind(&self) -> RandomSourceKind {
        (**self).kind()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }

    fn random_index(&self, max: usize) -> usize {
        (**self).random_index(max)
    }

    fn kind(&self) -> RandomSourceKind {
        (**self).kind()
    }
}
