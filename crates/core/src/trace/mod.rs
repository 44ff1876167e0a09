//! Cycle trace model and decoders.
//!
//! Simulator output arrives either as a free-text transcript or as one JSON record per
//! cycle. Both are decoded into the same [`CycleSnapshot`](snapshot::CycleSnapshot) so
//! that the cursor and overlays never depend on the source format.

/// Decoders turning raw simulator output into snapshots.
pub mod decode;
/// The normalized per-cycle snapshot and its parts.
pub mod snapshot;

pub use decode::{CycleDecoder, DecodedRun};
pub use snapshot::{CycleSnapshot, Stage, StageSlot};
