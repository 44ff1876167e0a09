//! Common types shared across the replay engine.
//!
//! Provides register identifiers, numeric literal parsing for simulator text, and the
//! error types returned by every fallible operation.

/// Error types for invocation, decoding, listings, configuration and sessions.
pub mod error;
/// Numeric literal parsing for addresses, values and encodings.
pub mod literal;
/// Architectural register identifiers (`x0`-`x31`) and ABI names.
pub mod reg;

pub use error::{ConfigError, DecodeError, InvokeError, ProgramError, SessionError};
pub use reg::RegisterId;
