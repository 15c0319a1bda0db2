#![deny(clippy::dbg_macro)]
#![deny(clippy::todo)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! # Tombola Sequencer - Layer 3: Draw Orders and Sessions
//!
//! - [`DrawSequencer`]: uniform Fisher-Yates permutations and the
//!   anti-repetition session sequence that keeps a new game's opening draws
//!   from echoing the previous game's closing draws
//! - [`DrawSession`]: the draw-state holder that pops items one at a time and
//!   carries finished history into the next session
//!
//! ## Design Principles
//!
//! - **Synchronous**: generation never blocks or awaits
//! - **Non-mutating**: inputs are borrowed, results are fresh `Vec`s
//! - **Pluggable entropy**: any [`tombola_core::RandomSource`] drives the shuffle

pub mod sequencer;
pub mod session;

pub use sequencer::{overlap_count, tail_window, DrawSequencer, GenerationStats, SessionSequence};
pub use session::DrawSession;
