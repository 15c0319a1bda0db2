#![deny(clippy::dbg_macro)]
#![deny(clippy::todo)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! # Tombola Core - Layer 1: Foundation
//!
//! Shared vocabulary for the draw-sequence generator:
//!
//! - [`TombolaError`] and the crate-wide [`Result`] alias
//! - The [`RandomSource`] effect trait that every shuffle draws from
//! - Layered configuration ([`SessionConfig`], [`SequencerConfig`], [`DrawSpeed`])
//! - Item-set construction ([`item_set`]) and game constants
//!
//! This crate has no knowledge of how randomness is produced; handlers live in
//! `tombola-effects`.

pub mod config;
pub mod effects;
pub mod errors;
pub mod items;

pub use config::{DrawSpeed, SequencerConfig, SessionConfig, TombolaConfig};
pub use effects::{RandomSource, RandomSourceKind};
pub use errors::{Result, TombolaError};
pub use items::{item_set, DEFAULT_AVOID_COUNT, DEFAULT_ITEM_COUNT, DEFAULT_MAX_OVERLAP};
