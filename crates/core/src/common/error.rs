//! Error definitions for the replay engine.
//!
//! This module defines every error surfaced to callers. It provides:
//! 1. **Invocation errors:** Missing simulator executable, launch failures, unsuccessful exits.
//! 2. **Decode errors:** Structured records that cannot be decoded or normalized.
//! 3. **Input errors:** Unreadable program listings and configuration files.
//! 4. **Session errors:** The union of the above as seen by `run` and `step`.
//!
//! Malformed writeback values are deliberately absent: they are dropped, not reported.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain output from the external simulator.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The simulator binary does not exist at the resolved location.
    ///
    /// Terminal for the session: no process is launched.
    #[error("Error: {name} not found.")]
    ExecutableNotFound {
        /// Platform executable name (e.g. `simulator.exe`).
        name: String,
        /// Full path that was checked.
        path: PathBuf,
    },

    /// The operating system refused to start the process.
    #[error("Error running simulator {}: {source}", path.display())]
    Launch {
        /// Executable that failed to start.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The simulator exited unsuccessfully in structured mode.
    ///
    /// `stderr` is kept verbatim for display.
    #[error("simulator exited with code {code:?}: {stderr}")]
    Failed {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Captured standard error text.
        stderr: String,
    },
}

/// Failure to turn structured simulator output into cycle snapshots.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A non-blank line is not a valid record.
    #[error("cycle record on line {line} is not valid: {source}")]
    Record {
        /// 1-based line number in the simulator's stdout.
        line: usize,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// A predictor table key, bit or target is not numeric.
    #[error("predictor {field} on line {line} is not numeric: {text:?}")]
    Address {
        /// 1-based line number in the simulator's stdout.
        line: usize,
        /// Which table field was malformed (`PHT pc`, `PHT bit`, `BTB pc`, `BTB target`).
        field: &'static str,
        /// The offending text.
        text: String,
    },
}

/// Failure to read a program listing.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// The listing file could not be read.
    #[error("failed to read program listing {}: {source}", path.display())]
    Io {
        /// Listing path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Configuration path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The simulator could not be run.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// The simulator output could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl SessionError {
    /// Returns `true` if the simulator executable is missing.
    ///
    /// Callers should stop issuing `run`/`step` for the session when this holds.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Invoke(InvokeError::ExecutableNotFound { .. }))
    }
}
