//! Test harness helpers.

use rvviz_core::sim::{Capture, CaptureMode, Session, SimulatorBackend};

/// Routes `tracing` output through the test writer. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

/// A successful capture with the given stdout and no stderr.
pub fn capture(stdout: &str) -> Capture {
    Capture {
        stdout: stdout.to_owned(),
        stderr: String::new(),
    }
}

/// A transcript-mode session over `backend` with no program.
pub fn transcript_session<B: SimulatorBackend>(backend: B) -> Session<B> {
    init_tracing();
    Session::new(backend, CaptureMode::Transcript, None)
}

/// A structured-mode session over `backend` with no program.
pub fn structured_session<B: SimulatorBackend>(backend: B) -> Session<B> {
    init_tracing();
    Session::new(backend, CaptureMode::Structured, None)
}
