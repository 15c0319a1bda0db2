#![deny(clippy::dbg_macro)]
#![deny(clippy::todo)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! # Tombola Effects - Layer 2: Effect Handlers
//!
//! Production implementations of the effect traits defined in `tombola-core`.
//! This is the only layer that touches real entropy.

pub mod random;

pub use random::{
    select_random_source, DefaultRandomHandler, SecureRandomHandler, SeededRandomHandler,
};
