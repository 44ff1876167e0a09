//! Replay session.
//!
//! A `Session` bundles everything one replay needs: the simulator backend, the request it
//! issues, the register file and the cycle cursor. Independent sessions share nothing.
//! It provides three operations:
//! 1. **run:** Discard the current sequence, invoke the simulator, decode the whole output,
//!    eagerly apply every writeback, and rewind the cursor.
//! 2. **step:** Hand out the next snapshot and apply its writebacks. When the cursor is
//!    exhausted (or was never filled) the step first performs a fresh `run`, and reports
//!    that through [`Step::Restarted`].
//! 3. **reset:** Restore register defaults and clear the sequence without invoking anything.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::arch::RegisterFile;
use crate::common::error::SessionError;
use crate::config::Config;
use crate::sim::cursor::Cursor;
use crate::sim::invoker::{CaptureMode, Invocation, ProcessInvoker, SimulatorBackend};
use crate::trace::decode::decoder_for;
use crate::trace::snapshot::CycleSnapshot;

/// Text reported by a transcript run whose output is blank.
pub const NO_OUTPUT: &str = "No output from simulator.";

/// Result of a full run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutput {
    /// Output for display: the trimmed transcript (or [`NO_OUTPUT`]), or the raw record stream.
    pub text: String,
    /// The complete snapshot sequence now held by the cursor.
    pub snapshots: Vec<CycleSnapshot>,
    /// Whatever the simulator wrote to stderr; its diagnostics when it exits early.
    pub stderr: String,
}

/// Result of a single step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved to the next snapshot of the current sequence.
    Advanced(CycleSnapshot),
    /// The cursor was empty or exhausted, so the simulator was run again; this is the
    /// first snapshot of the new sequence.
    Restarted(CycleSnapshot),
    /// The simulator was run again but produced no cycles.
    Empty,
}

impl Step {
    /// The snapshot handed out, if any.
    pub const fn snapshot(&self) -> Option<&CycleSnapshot> {
        match self {
            Self::Advanced(snapshot) | Self::Restarted(snapshot) => Some(snapshot),
            Self::Empty => None,
        }
    }

    /// Returns `true` if this step started a new simulator run.
    pub const fn restarted(&self) -> bool {
        matches!(self, Self::Restarted(_) | Self::Empty)
    }
}

/// State of one replay: backend, request, registers and cursor.
#[derive(Debug)]
pub struct Session<B> {
    backend: B,
    request: Invocation,
    registers: RegisterFile,
    cursor: Cursor,
    output: String,
}

impl Session<ProcessInvoker> {
    /// Creates a session that runs the real simulator as configured.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ProcessInvoker::new(&config.simulator),
            config.session.mode,
            config.session.program.clone(),
        )
    }
}

impl<B: SimulatorBackend> Session<B> {
    /// Creates a session with registers at their defaults and an empty cursor.
    ///
    /// # Arguments
    ///
    /// * `backend` - Source of simulator output.
    /// * `mode` - Output format to request.
    /// * `program` - Program file passed to the simulator, if any.
    pub fn new(backend: B, mode: CaptureMode, program: Option<PathBuf>) -> Self {
        Self {
            backend,
            request: Invocation { mode, program },
            registers: RegisterFile::new(),
            cursor: Cursor::new(),
            output: String::new(),
        }
    }

    /// Runs the simulator and replaces the snapshot sequence.
    ///
    /// The previous sequence is discarded before invoking, so on error the cursor is empty.
    /// Registers are not reset; the run's writebacks are applied on top of them.
    ///
    /// # Returns
    ///
    /// The display text, the full sequence and the simulator's stderr.
    pub fn run(&mut self) -> Result<RunOutput, SessionError> {
        self.cursor.clear();
        self.output.clear();

        let capture = self.backend.invoke(&self.request)?;
        let stderr = capture.stderr.trim_end();
        if !stderr.is_empty() {
            warn!(mode = ?self.request.mode, stderr, "simulator reported diagnostics");
        }
        let stderr = stderr.to_owned();
        let text = match self.request.mode {
            CaptureMode::Transcript => {
                let trimmed = capture.stdout.trim();
                let shown = if trimmed.is_empty() { NO_OUTPUT } else { trimmed };
                shown.to_owned()
            }
            CaptureMode::Structured => capture.stdout,
        };

        let decoded = decoder_for(self.request.mode).decode(&text)?;
        self.registers.apply_all(&decoded.writebacks);
        self.cursor.load(decoded.snapshots);
        info!(
            mode = ?self.request.mode,
            cycles = self.cursor.len(),
            writebacks = decoded.writebacks.len(),
            "run complete"
        );

        self.output.clone_from(&text);
        Ok(RunOutput {
            text,
            snapshots: self.cursor.snapshots().to_vec(),
            stderr,
        })
    }

    /// Advances one cycle, re-running the simulator first if the cursor is exhausted.
    ///
    /// # Returns
    ///
    /// The snapshot handed out, tagged with whether a new run was started.
    pub fn step(&mut self) -> Result<Step, SessionError> {
        let restarted = self.cursor.is_exhausted();
        if restarted {
            debug!(position = self.cursor.position(), "cursor exhausted, re-running simulator");
            let _ = self.run()?;
        }

        let Some(snapshot) = self.cursor.advance() else {
            return Ok(Step::Empty);
        };
        self.registers.apply_all(&snapshot.writebacks);
        let snapshot = snapshot.clone();
        debug!(position = self.cursor.position(), cycle = ?snapshot.cycle, "stepped");

        Ok(if restarted {
            Step::Restarted(snapshot)
        } else {
            Step::Advanced(snapshot)
        })
    }

    /// Restores register defaults and clears the sequence. Does not invoke the simulator.
    pub fn reset(&mut self) {
        self.registers.initialize();
        self.cursor.clear();
        self.output.clear();
        debug!("session reset");
    }

    /// Current register values.
    pub const fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// The cycle cursor.
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Display text of the last successful run (empty after a reset).
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Output format requested from the simulator.
    pub const fn mode(&self) -> CaptureMode {
        self.request.mode
    }

    /// Program passed to the simulator.
    pub fn program(&self) -> Option<&std::path::Path> {
        self.request.program.as_deref()
    }

    /// Changes the program for subsequent runs. The current sequence is kept.
    pub fn set_program(&mut self, program: Option<PathBuf>) {
        self.request.program = program;
    }

    /// The simulator backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}
