//! External simulator invocation.
//!
//! This module runs the opaque simulator binary and captures its output. It performs:
//! 1. **Resolution:** Locates the executable for a capture mode in the configured directory,
//!    appending the platform executable suffix.
//! 2. **Invocation:** Launches it with the program path (and the structured-output flag),
//!    blocking until exit with stdout and stderr fully buffered.
//! 3. **Failure mapping:** Missing binaries short-circuit before any launch; structured runs
//!    with a nonzero exit surface stderr verbatim.
//!
//! There is no timeout: a simulator that never exits blocks the caller.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::common::error::InvokeError;
use crate::config::SimulatorConfig;

/// How the simulator is asked to report each cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum CaptureMode {
    /// Legacy free-text log with writeback announcements and dashed cycle delimiters.
    #[default]
    #[serde(alias = "transcript", alias = "TRANSCRIPT")]
    Transcript,
    /// One JSON record per line and cycle.
    #[serde(alias = "structured", alias = "STRUCTURED", alias = "Json", alias = "json")]
    Structured,
}

/// Parameters of one simulator run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Output format to request.
    pub mode: CaptureMode,
    /// Machine-code program to pass, if any.
    pub program: Option<PathBuf>,
}

/// Output captured from a finished simulator process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capture {
    /// Complete standard output.
    pub stdout: String,
    /// Complete standard error.
    pub stderr: String,
}

/// Source of simulator output for a session.
///
/// [`ProcessInvoker`] is the real implementation; tests substitute canned output.
pub trait SimulatorBackend {
    /// Runs the simulator to completion and returns its output.
    ///
    /// # Arguments
    ///
    /// * `request` - Capture mode and program for this run.
    fn invoke(&self, request: &Invocation) -> Result<Capture, InvokeError>;
}

/// Runs the simulator binaries found in one directory.
#[derive(Clone, Debug)]
pub struct ProcessInvoker {
    directory: PathBuf,
    transcript_executable: String,
    structured_executable: String,
    structured_flag: String,
    structured_program: PathBuf,
}

impl ProcessInvoker {
    /// Creates an invoker from configuration.
    ///
    /// Without a configured directory, the directory of the running executable is used
    /// (falling back to the working directory if it cannot be determined).
    pub fn new(config: &SimulatorConfig) -> Self {
        let directory = config.directory.clone().unwrap_or_else(default_directory);
        Self {
            directory,
            transcript_executable: config.transcript_executable.clone(),
            structured_executable: config.structured_executable.clone(),
            structured_flag: config.structured_flag.clone(),
            structured_program: config.structured_program.clone(),
        }
    }

    /// Directory the executables are resolved in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Platform executable name for `mode` (e.g. `simulator.exe` on Windows).
    pub fn executable_name(&self, mode: CaptureMode) -> String {
        let stem = match mode {
            CaptureMode::Transcript => &self.transcript_executable,
            CaptureMode::Structured => &self.structured_executable,
        };
        format!("{stem}{}", env::consts::EXE_SUFFIX)
    }

    /// Full path of the executable for `mode`.
    pub fn executable_path(&self, mode: CaptureMode) -> PathBuf {
        self.directory.join(self.executable_name(mode))
    }

    /// Argument list for a request: the program path, then the structured flag if requested.
    ///
    /// Structured requests without a program use the configured default program, so the
    /// flag never takes the program's position.
    pub fn arguments(&self, request: &Invocation) -> Vec<String> {
        match request.mode {
            CaptureMode::Transcript => request
                .program
                .iter()
                .map(|program| program.to_string_lossy().into_owned())
                .collect(),
            CaptureMode::Structured => {
                let program = request.program.as_ref().unwrap_or(&self.structured_program);
                vec![
                    program.to_string_lossy().into_owned(),
                    self.structured_flag.clone(),
                ]
            }
        }
    }
}

impl SimulatorBackend for ProcessInvoker {
    fn invoke(&self, request: &Invocation) -> Result<Capture, InvokeError> {
        let path = self.executable_path(request.mode);
        if !path.is_file() {
            warn!(path = %path.display(), "simulator executable not found");
            return Err(InvokeError::ExecutableNotFound {
                name: self.executable_name(request.mode),
                path,
            });
        }

        let args = self.arguments(request);
        info!(path = %path.display(), ?args, mode = ?request.mode, "launching simulator");
        let output = Command::new(&path)
            .args(&args)
            .output()
            .map_err(|source| InvokeError::Launch {
                path: path.clone(),
                source,
            })?;

        let capture = Capture {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            status = ?output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "simulator exited"
        );

        if request.mode == CaptureMode::Structured && !output.status.success() {
            return Err(InvokeError::Failed {
                code: output.status.code(),
                stderr: capture.stderr,
            });
        }
        Ok(capture)
    }
}

fn default_directory() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
