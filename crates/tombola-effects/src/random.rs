//! Random effect handlers
//!
//! Standard implementations of the `RandomSource` trait defined in
//! `tombola-core`:
//!
//! - [`SecureRandomHandler`]: operating system entropy through `getrandom`
//! - [`DefaultRandomHandler`]: clock-seeded `StdRng`, used when OS entropy is
//!   unavailable
//! - [`SeededRandomHandler`]: ChaCha20 with a caller-chosen seed, for replays
//!
//! [`select_random_source`] picks between the first two once, at construction.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tombola_core::{RandomSource, RandomSourceKind};
use tracing::{debug, info, warn};

static FALLBACK_STREAM: AtomicU64 = AtomicU64::new(0);

/// Seed for fallback generators: wall clock mixed with a per-process stream
/// counter so handlers built in the same nanosecond still diverge.
fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let stream = FALLBACK_STREAM.fetch_add(1, Ordering::Relaxed);
    nanos ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn os_u32() -> Result<u32, getrandom::Error> {
    let mut bytes = [0u8; 4];
    getrandom::getrandom(&mut bytes)?;
    Ok(u32::from_ne_bytes(bytes))
}

/// Non-cryptographic fallback handler
///
/// Indices are produced by scaling a unit-interval sample into `[0, max)`,
/// the way a runtime's default `random()` is usually consumed.
#[derive(Debug)]
pub struct DefaultRandomHandler {
    rng: Mutex<StdRng>,
}

impl Default for DefaultRandomHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultRandomHandler {
    /// Create a handler seeded from the system clock
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create a handler with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for DefaultRandomHandler {
    fn next_u32(&self) -> u32 {
        self.rng.lock().next_u32()
    }

    fn random_index(&self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        let unit: f64 = self.rng.lock().gen();
        ((unit * max as f64) as usize).min(max - 1)
    }

    fn kind(&self) -> RandomSourceKind {
        RandomSourceKind::Default
    }
}

/// Handler backed by operating system entropy
///
/// If the OS source fails after construction the handler keeps answering from
/// an internal [`DefaultRandomHandler`] and logs the degradation once.
#[derive(Debug, Default)]
pub struct SecureRandomHandler {
    fallback: DefaultRandomHandler,
    degraded: AtomicBool,
}

impl SecureRandomHandler {
    /// Create a secure handler without checking OS entropy availability
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a secure handler if OS entropy can be read right now
    pub fn probe() -> Option<Self> {
        match os_u32() {
            Ok(_) => Some(Self::new()),
            Err(err) => {
                debug!(error = %err, "OS entropy probe failed");
                None
            }
        }
    }

    /// Whether a draw has had to fall back to the non-cryptographic generator
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }
}

impl RandomSource for SecureRandomHandler {
    fn next_u32(&self) -> u32 {
        match os_u32() {
            Ok(value) => value,
            Err(err) => {
                if !self.degraded.swap(true, Ordering::Relaxed) {
                    warn!(error = %err, "OS entropy read failed; continuing with default generator");
                }
                self.fallback.next_u32()
            }
        }
    }

    fn kind(&self) -> RandomSourceKind {
        RandomSourceKind::Secure
    }
}

/// Reproducible handler backed by a seeded ChaCha20 stream
#[derive(Debug)]
pub struct SeededRandomHandler {
    rng: Mutex<ChaCha20Rng>,
}

impl SeededRandomHandler {
    /// Create a handler with the fixed seed used across tests
    pub fn deterministic() -> Self {
        Self::with_seed([42; 32])
    }

    /// Create a handler with a specific 32-byte seed
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::from_seed(seed)),
        }
    }

    /// Create a handler from a short numeric seed
    pub fn from_u64(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomHandler {
    fn next_u32(&self) -> u32 {
        self.rng.lock().next_u32()
    }

    fn kind(&self) -> RandomSourceKind {
        RandomSourceKind::Deterministic
    }
}

/// Pick the best available entropy source
///
/// Prefers OS entropy; when it cannot be read, falls back to
/// [`DefaultRandomHandler`]. The fallback is reported at `info` level only.
pub fn select_random_source() -> Arc<dyn RandomSource> {
    match SecureRandomHandler::probe() {
        Some(secure) => {
            debug!(kind = %RandomSourceKind::Secure, "selected random source");
            Arc::new(secure)
        }
        None => {
            info!(
                kind = %RandomSourceKind::Default,
                "OS entropy unavailable; using default pseudorandom generator"
            );
            Arc::new(DefaultRandomHandler::new())
        }
    }
}
