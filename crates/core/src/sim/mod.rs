//! Simulator invocation and replay.
//!
//! Provides the process invoker for the external simulator, the program listing loader,
//! and the cursor and session that step through a decoded run.

/// Cycle cursor over a decoded sequence.
pub mod cursor;
/// External simulator process invocation.
pub mod invoker;
/// Machine-code program listing loader.
pub mod program;
/// Replay session: run, step and reset.
pub mod session;

pub use cursor::Cursor;
pub use invoker::{Capture, CaptureMode, Invocation, ProcessInvoker, SimulatorBackend};
pub use program::{ListingEntry, ProgramListing};
pub use session::{RunOutput, Session, Step};
