#![deny(clippy::dbg_macro)]
#![deny(clippy::todo)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! # Tombola Testkit
//!
//! Deterministic random sources, fixtures and proptest strategies shared by
//! the workspace's tests.

pub mod fixtures;
pub mod random;
pub mod strategies;

pub use fixtures::{ascending_history, standard_items, wraparound_tail};
pub use random::{deterministic_source, seeded_source, CountingRandomSource, ScriptedRandomSource};
