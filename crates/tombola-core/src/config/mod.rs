//! Configuration system
//!
//! Layered configuration (defaults, file, environment, explicit overrides)
//! with validation applied once all layers are merged.

pub mod session;
pub mod traits;
pub mod validation;

pub use session::{DrawSpeed, SequencerConfig, SessionConfig};
pub use traits::{parse_value, TombolaConfig, ENV_PREFIX};
pub use validation::{ConfigValidator, ValidationError, ValidationResult};
