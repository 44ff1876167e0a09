//! Structured record decoder and normalizer.
//!
//! In structured mode the simulator prints one JSON object per line and cycle:
//!
//! ```text
//! {"pipeline":{"IF":"addi x1,x0,5","ID":"---"},"hazards":[{"stage":"EX","type":"RAW"}],
//!  "forwarding":[{"from":"MEM","to":"EX"}],"predictor":{"PHT":{"0x10":1},"BTB":{"0x10":"0x20"}}}
//! ```
//!
//! This module performs:
//! 1. **Decoding:** Each non-blank line is decoded independently; the first failure aborts the stream.
//! 2. **Normalization:** Missing stages become explicit empty slots, hazard kinds are classified
//!    case-insensitively, and predictor keys and targets are parsed as addresses.
//!
//! Stage names the pipeline does not have are skipped with a warning, matching how
//! they could never be drawn.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::common::error::DecodeError;
use crate::common::literal::parse_address;
use crate::trace::decode::{CycleDecoder, DecodedRun};
use crate::trace::snapshot::{
    CycleSnapshot, ForwardingEdge, Hazard, HazardKind, PipelineView, PredictorTables, Stage,
    StageSlot,
};

/// One cycle record exactly as the simulator emits it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CycleRecord {
    /// Stage name -> instruction text. Absent or `null` entries are empty stages.
    #[serde(default)]
    pub pipeline: BTreeMap<String, Option<String>>,
    /// Hazards in report order.
    #[serde(default)]
    pub hazards: Vec<HazardRecord>,
    /// Forwarding edges in report order.
    #[serde(default)]
    pub forwarding: Vec<ForwardingRecord>,
    /// Branch predictor tables.
    #[serde(default)]
    pub predictor: PredictorRecord,
}

/// A hazard entry (`{"stage": "EX", "type": "RAW"}`).
#[derive(Clone, Debug, Deserialize)]
pub struct HazardRecord {
    /// Stage name.
    pub stage: String,
    /// Hazard type, any case.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A forwarding entry (`{"from": "MEM", "to": "EX"}`).
#[derive(Clone, Debug, Deserialize)]
pub struct ForwardingRecord {
    /// Source stage name.
    pub from: String,
    /// Destination stage name.
    pub to: String,
}

/// Predictor tables keyed by program-counter text.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PredictorRecord {
    /// Pattern History Table.
    #[serde(rename = "PHT", default)]
    pub pht: BTreeMap<String, Literal>,
    /// Branch Target Buffer.
    #[serde(rename = "BTB", default)]
    pub btb: BTreeMap<String, Literal>,
}

/// A numeric field that may be printed as a JSON number, boolean or string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// `true` / `false`.
    Flag(bool),
    /// Plain JSON number.
    Number(u64),
    /// Text such as `"0x20"`.
    Text(String),
}

impl Literal {
    fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Flag(flag) => Some(u32::from(*flag)),
            Self::Number(n) => u32::try_from(*n).ok(),
            Self::Text(text) => parse_address(text),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Flag(flag) => flag.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Decoder for newline-delimited JSON records.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordDecoder;

impl CycleDecoder for RecordDecoder {
    fn decode(&self, output: &str) -> Result<DecodedRun, DecodeError> {
        Ok(DecodedRun {
            snapshots: decode_structured_stream(output)?,
            writebacks: Vec::new(),
        })
    }
}

/// Decodes every non-blank line of `output` as one cycle record.
///
/// # Returns
///
/// Snapshots in line order, or the first line that fails to decode or normalize.
pub fn decode_structured_stream(output: &str) -> Result<Vec<CycleSnapshot>, DecodeError> {
    let mut snapshots = Vec::new();
    for (offset, text) in output.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        let line = offset + 1;
        let record: CycleRecord =
            serde_json::from_str(text).map_err(|source| DecodeError::Record { line, source })?;
        snapshots.push(normalize(record, snapshots.len(), line)?);
    }
    debug!(cycles = snapshots.len(), "decoded structured stream");
    Ok(snapshots)
}

/// Converts one decoded record into a snapshot.
///
/// # Arguments
///
/// * `record` - The decoded record.
/// * `index` - Position the snapshot will take in the sequence.
/// * `line` - 1-based source line, for error reporting.
pub fn normalize(
    record: CycleRecord,
    index: usize,
    line: usize,
) -> Result<CycleSnapshot, DecodeError> {
    let mut pipeline = PipelineView::default();
    for (name, instruction) in record.pipeline {
        let Some(stage) = Stage::parse(&name) else {
            warn!(stage = %name, line, "ignoring unknown pipeline stage");
            continue;
        };
        if let Some(label) = instruction {
            pipeline.set(stage, StageSlot::Instruction(label));
        }
    }

    let hazards = record
        .hazards
        .into_iter()
        .filter_map(|hazard| {
            let Some(stage) = Stage::parse(&hazard.stage) else {
                warn!(stage = %hazard.stage, line, "ignoring hazard in unknown stage");
                return None;
            };
            Some(Hazard {
                stage,
                kind: HazardKind::classify(&hazard.kind),
            })
        })
        .collect();

    let forwarding = record
        .forwarding
        .into_iter()
        .filter_map(|edge| match (Stage::parse(&edge.from), Stage::parse(&edge.to)) {
            (Some(from), Some(to)) => Some(ForwardingEdge { from, to }),
            _ => {
                warn!(from = %edge.from, to = %edge.to, line, "ignoring forwarding edge with unknown stage");
                None
            }
        })
        .collect();

    Ok(CycleSnapshot {
        index,
        pipeline,
        hazards,
        forwarding,
        predictor: normalize_predictor(record.predictor, line)?,
        ..CycleSnapshot::default()
    })
}

fn normalize_predictor(record: PredictorRecord, line: usize) -> Result<PredictorTables, DecodeError> {
    let address = |field: &'static str, text: &str| {
        parse_address(text).ok_or_else(|| DecodeError::Address {
            line,
            field,
            text: text.to_owned(),
        })
    };

    let mut tables = PredictorTables::default();
    for (pc, bit) in &record.pht {
        let pc = address("PHT pc", pc.as_str())?;
        let bit = bit.as_u32().ok_or_else(|| DecodeError::Address {
            line,
            field: "PHT bit",
            text: bit.describe(),
        })?;
        let _ = tables.pht.insert(pc, bit != 0);
    }
    for (pc, target) in &record.btb {
        let pc = address("BTB pc", pc.as_str())?;
        let target = target.as_u32().ok_or_else(|| DecodeError::Address {
            line,
            field: "BTB target",
            text: target.describe(),
        })?;
        let _ = tables.btb.insert(pc, target);
    }
    Ok(tables)
}
