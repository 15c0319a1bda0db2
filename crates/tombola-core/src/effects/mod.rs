//! Effect traits
//!
//! Capabilities the draw sequencer requires from its environment. Handlers
//! implementing them live in `tombola-effects` (production) and
//! `tombola-testkit` (deterministic).

pub mod random;

pub use random::{RandomSource, RandomSourceKind};
