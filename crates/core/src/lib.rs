//! RISC-V pipeline replay library.
//!
//! This crate reconstructs per-cycle state from the output of an external RISC-V pipeline
//! simulator and replays it one cycle at a time. It provides:
//! 1. **Architecture:** The 32-entry register file rebuilt from writeback announcements.
//! 2. **Trace:** Normalized cycle snapshots and the two decoders (free-text transcript, JSON records).
//! 3. **Simulation:** Process invocation, program listings, the cycle cursor and the replay session.
//! 4. **Overlay:** Hazard, forwarding and branch-predictor views derived from a snapshot.
//! 5. **Statistics:** Summary counters over a decoded run.
//!
//! The simulator itself is opaque: nothing here decodes or executes instructions.

/// Register file model rebuilt from writeback events.
pub mod arch;
/// Common types (register identifiers, numeric literals, errors).
pub mod common;
/// Replay configuration (simulator location, capture mode, program).
pub mod config;
/// Display overlays derived from a cycle snapshot.
pub mod overlay;
/// Simulator invocation, program listings, cursor and session.
pub mod sim;
/// Summary statistics over a decoded cycle sequence.
pub mod stats;
/// Cycle snapshots and the decoders producing them.
pub mod trace;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Replay session owning the register file, cursor and simulator backend.
pub use crate::sim::session::{Session, Step};
/// Normalized per-cycle state record.
pub use crate::trace::snapshot::CycleSnapshot;
