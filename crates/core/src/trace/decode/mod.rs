//! Output decoders.
//!
//! This module defines the ingestion interface shared by both simulator output formats.
//! It provides:
//! 1. **Interface:** The [`CycleDecoder`] trait producing a [`DecodedRun`].
//! 2. **Transcript codec:** Free-text logs with writeback announcements and dashed cycle delimiters.
//! 3. **Record codec:** Newline-delimited JSON, one record per cycle.

/// Structured (JSON record) decoder and normalizer.
pub mod record;
/// Free-text transcript decoder.
pub mod transcript;

use crate::arch::WritebackEvent;
use crate::common::error::DecodeError;
use crate::sim::invoker::CaptureMode;
use crate::trace::snapshot::CycleSnapshot;

pub use record::{RecordDecoder, decode_structured_stream};
pub use transcript::{TranscriptDecoder, decode_text_transcript};

/// Everything one simulator invocation contributes to a replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedRun {
    /// Cycle snapshots in execution order.
    pub snapshots: Vec<CycleSnapshot>,
    /// Writebacks across the whole output, in textual order. Applied eagerly by `run`.
    pub writebacks: Vec<WritebackEvent>,
}

/// Converts the complete stdout of one simulator invocation into cycle snapshots.
pub trait CycleDecoder {
    /// Decodes `output`.
    ///
    /// # Arguments
    ///
    /// * `output` - Captured stdout, complete.
    ///
    /// # Returns
    ///
    /// The decoded run, or the first error. A failing decoder yields no partial sequence.
    fn decode(&self, output: &str) -> Result<DecodedRun, DecodeError>;
}

/// Returns the decoder matching a capture mode.
pub fn decoder_for(mode: CaptureMode) -> &'static dyn CycleDecoder {
    match mode {
        CaptureMode::Transcript => &TranscriptDecoder,
        CaptureMode::Structured => &RecordDecoder,
    }
}
