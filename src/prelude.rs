//! Prelude module for `amiigen`.
//!
//! Everything from `amiigen_types::prelude` plus the settings and generator types.

// Re-export everything from amiigen_types::prelude
#[doc(inline)]
pub use amiigen_types::prelude::*;

#[doc(inline)]
pub use crate::config::Settings;

#[doc(inline)]
pub use crate::generator::{GenerationReport, Generator, GeneratorError, Mismatch, VerificationFailure};

// Re-export the entire amiigen_types crate for advanced usage
#[doc(inline)]
pub use amiigen_types;
