//! Configuration for the replay engine.
//!
//! This module defines the configuration structures for locating and driving the
//! external simulator. It provides:
//! 1. **Defaults:** Executable names and the structured-output flag used by the simulator builds.
//! 2. **Structures:** Simulator location settings and per-session settings.
//! 3. **Loading:** Deserialization from JSON text or a JSON file.
//!
//! Every field has a default, so `{}` is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::sim::invoker::CaptureMode;

/// Default configuration constants.
mod defaults {
    /// Executable producing the free-text transcript (without platform suffix).
    pub const TRANSCRIPT_EXECUTABLE: &str = "simulator";

    /// Executable producing structured records (without platform suffix).
    pub const STRUCTURED_EXECUTABLE: &str = "simulator3";

    /// Flag requesting one JSON record per cycle.
    pub const STRUCTURED_FLAG: &str = "--json";

    /// Program passed in structured mode when the session names none.
    pub const STRUCTURED_PROGRAM: &str = "output.mc";
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rvviz_core::config::Config;
/// use rvviz_core::sim::CaptureMode;
///
/// let json = r#"{
///     "simulator": { "directory": "/opt/riscv/bin" },
///     "session": { "mode": "Structured", "program": "output.mc" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.session.mode, CaptureMode::Structured);
/// assert_eq!(config.simulator.structured_flag, "--json");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Simulator location and naming.
    #[serde(default)]
    pub simulator: SimulatorConfig,
    /// Session settings.
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Configuration file path.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Where the simulator lives and how its builds are named.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    /// Directory containing the executables. Defaults to the running program's directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Transcript-mode executable name, without platform suffix.
    #[serde(default = "SimulatorConfig::default_transcript_executable")]
    pub transcript_executable: String,

    /// Structured-mode executable name, without platform suffix.
    #[serde(default = "SimulatorConfig::default_structured_executable")]
    pub structured_executable: String,

    /// Flag passed after the program path in structured mode.
    #[serde(default = "SimulatorConfig::default_structured_flag")]
    pub structured_flag: String,

    /// Program passed in structured mode when the session names none; the structured
    /// build always expects a program before the flag.
    #[serde(default = "SimulatorConfig::default_structured_program")]
    pub structured_program: PathBuf,
}

impl SimulatorConfig {
    fn default_transcript_executable() -> String {
        defaults::TRANSCRIPT_EXECUTABLE.to_owned()
    }

    fn default_structured_executable() -> String {
        defaults::STRUCTURED_EXECUTABLE.to_owned()
    }

    fn default_structured_flag() -> String {
        defaults::STRUCTURED_FLAG.to_owned()
    }

    fn default_structured_program() -> PathBuf {
        PathBuf::from(defaults::STRUCTURED_PROGRAM)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            directory: None,
            transcript_executable: Self::default_transcript_executable(),
            structured_executable: Self::default_structured_executable(),
            structured_flag: Self::default_structured_flag(),
            structured_program: Self::default_structured_program(),
        }
    }
}

/// Per-session settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Output format to request.
    #[serde(default)]
    pub mode: CaptureMode,

    /// Program file passed to the simulator.
    #[serde(default)]
    pub program: Option<PathBuf>,
}
