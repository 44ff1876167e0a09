//! Architectural state reconstructed from simulator output.
//!
//! Only the integer register file is observable: the simulator announces every
//! register write, and replaying those announcements rebuilds the register values.

/// Register file model and writeback events.
pub mod regfile;

pub use regfile::{RegisterFile, WritebackEvent};
