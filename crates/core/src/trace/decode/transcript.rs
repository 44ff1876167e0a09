//! Free-text transcript decoder.
//!
//! The legacy simulator prints one block per cycle:
//!
//! ```text
//! --------------------
//! [CYCLE 3]
//! [FETCH] PC = 0x8, IR = 0x00a00593
//! ...
//! [WRITEBACK] Writing 0x6 to x10
//! [STATE] PC = 0xc, Clock = 4
//! ```
//!
//! This module performs:
//! 1. **Writeback extraction:** Every `Writing <hex> to x<n>` announcement, in textual order.
//! 2. **Cycle splitting:** Chunks between delimiter lines, kept only if they carry a `[CYCLE` marker.
//! 3. **Cycle numbering:** The number inside each block's `[CYCLE n]` marker.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::arch::WritebackEvent;
use crate::common::error::DecodeError;
use crate::common::literal::parse_hex;
use crate::common::reg::RegisterId;
use crate::trace::decode::{CycleDecoder, DecodedRun};
use crate::trace::snapshot::CycleSnapshot;

/// Line separating cycles in the transcript (exactly twenty dashes).
pub const CYCLE_DELIMITER: &str = "--------------------";

/// Token that marks a chunk as a cycle block.
pub const CYCLE_MARKER: &str = "[CYCLE";

static WRITEBACK_PATTERN: OnceLock<Regex> = OnceLock::new();
static CYCLE_PATTERN: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn writeback_pattern() -> &'static Regex {
    WRITEBACK_PATTERN.get_or_init(|| {
        Regex::new(r"Writing\s+(0x[0-9A-Fa-f]+)\s+to\s+(x\d+)").expect("writeback pattern is valid")
    })
}

#[allow(clippy::expect_used)]
fn cycle_pattern() -> &'static Regex {
    CYCLE_PATTERN
        .get_or_init(|| Regex::new(r"\[CYCLE\s+(\d+)\s*\]").expect("cycle pattern is valid"))
}

/// Decoder for the free-text transcript format.
#[derive(Clone, Copy, Debug, Default)]
pub struct TranscriptDecoder;

impl CycleDecoder for TranscriptDecoder {
    fn decode(&self, output: &str) -> Result<DecodedRun, DecodeError> {
        Ok(decode_text_transcript(output))
    }
}

/// Extracts every writeback announcement from `text`, in the order they appear.
///
/// A match whose value does not fit in 32 bits, or whose register is not `x0`-`x31`,
/// produces no event.
///
/// # Examples
///
/// ```
/// use rvviz_core::trace::decode::transcript::extract_writebacks;
///
/// let events = extract_writebacks("Writing 0x1 to x5\nWriting 0x2 to x5");
/// assert_eq!(events.iter().map(|e| e.value).collect::<Vec<_>>(), [1, 2]);
/// ```
pub fn extract_writebacks(text: &str) -> Vec<WritebackEvent> {
    writeback_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let value_text = caps.get(1)?.as_str();
            let register_text = caps.get(2)?.as_str();
            let Some(value) = parse_hex(value_text) else {
                debug!(value = value_text, register = register_text, "dropping malformed writeback value");
                return None;
            };
            let Some(register) = RegisterId::parse(register_text) else {
                debug!(register = register_text, "dropping writeback to unknown register");
                return None;
            };
            Some(WritebackEvent::new(register, value))
        })
        .collect()
}

/// Splits a transcript into cycle blocks.
///
/// The text is cut at every delimiter line. Chunks without a [`CYCLE_MARKER`] (such as
/// the preamble before the first cycle) are discarded. Each kept block is the delimiter
/// line followed by the trimmed chunk.
pub fn split_cycles(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim() == CYCLE_DELIMITER {
            chunks.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    chunks.push(current);

    chunks
        .into_iter()
        .filter(|chunk| chunk.contains(CYCLE_MARKER))
        .map(|chunk| format!("{CYCLE_DELIMITER}\n{}", chunk.trim()))
        .collect()
}

/// Returns the number in a block's `[CYCLE n]` marker.
pub fn cycle_number(block: &str) -> Option<u64> {
    cycle_pattern()
        .captures(block)
        .and_then(|caps| caps.get(1)?.as_str().parse().ok())
}

/// Decodes a complete transcript.
///
/// # Returns
///
/// One snapshot per cycle block, each carrying its own writebacks, plus the writebacks
/// of the whole transcript (preamble included) for eager application.
pub fn decode_text_transcript(text: &str) -> DecodedRun {
    let snapshots: Vec<CycleSnapshot> = split_cycles(text)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let writebacks = extract_writebacks(&block);
            let cycle = cycle_number(&block);
            CycleSnapshot::from_block(index, cycle, block, writebacks)
        })
        .collect();
    let writebacks = extract_writebacks(text);
    debug!(cycles = snapshots.len(), writebacks = writebacks.len(), "decoded transcript");
    DecodedRun {
        snapshots,
        writebacks,
    }
}
