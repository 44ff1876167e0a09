//! Normalized cycle snapshots.
//!
//! This module defines the single per-cycle record that both decoders produce. It provides:
//! 1. **Stages:** The fixed, ordered five-stage pipeline (`IF`, `ID`, `EX`, `MEM`, `WB`).
//! 2. **Occupancy:** Every stage always has an entry, either an instruction or explicitly empty.
//! 3. **Annotations:** Hazards, forwarding edges and branch-predictor tables for the cycle.
//! 4. **Transcript payload:** The verbatim text block and its writebacks for free-text output.

use std::collections::BTreeMap;
use std::fmt;

use crate::arch::WritebackEvent;

/// Text shown for a stage holding no instruction.
pub const EMPTY_STAGE: &str = "---";

/// Pipeline stage, in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Instruction fetch.
    If,
    /// Instruction decode / register read.
    Id,
    /// Execute.
    Ex,
    /// Memory access.
    Mem,
    /// Writeback.
    Wb,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 5] = [Self::If, Self::Id, Self::Ex, Self::Mem, Self::Wb];

    /// Canonical stage name as printed by the simulator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Id => "ID",
            Self::Ex => "EX",
            Self::Mem => "MEM",
            Self::Wb => "WB",
        }
    }

    /// Parses a stage name, ignoring case and surrounding whitespace.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|stage| stage.name().eq_ignore_ascii_case(text))
    }

    /// Position of the stage in the pipeline (`IF` = 0).
    pub const fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of one pipeline stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StageSlot {
    /// No instruction in the stage (also used when the record omits the stage).
    #[default]
    Empty,
    /// Instruction label as reported by the simulator.
    Instruction(String),
}

impl StageSlot {
    /// Returns `true` for [`StageSlot::Empty`].
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the slot is empty or holds the simulator's own
    /// [`EMPTY_STAGE`] filler.
    pub fn is_vacant(&self) -> bool {
        self.instruction().is_none_or(|label| label == EMPTY_STAGE)
    }

    /// Instruction label, if any.
    pub fn instruction(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Instruction(label) => Some(label),
        }
    }
}

impl fmt::Display for StageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.instruction().unwrap_or(EMPTY_STAGE))
    }
}

/// Occupancy of all five stages; always holds exactly one slot per stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineView {
    slots: [StageSlot; 5],
}

impl PipelineView {
    /// Slot for `stage`.
    pub const fn get(&self, stage: Stage) -> &StageSlot {
        &self.slots[stage.position()]
    }

    /// Replaces the slot for `stage`.
    pub fn set(&mut self, stage: Stage, slot: StageSlot) {
        self.slots[stage.position()] = slot;
    }

    /// Iterates `(stage, slot)` pairs in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &StageSlot)> {
        Stage::ALL.into_iter().zip(self.slots.iter())
    }

    /// Returns `true` if no stage holds an instruction. Stages the simulator
    /// printed as [`EMPTY_STAGE`] count as vacant.
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(StageSlot::is_vacant)
    }
}

/// Hazard classification, normalized from the simulator's case-insensitive `type` text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HazardKind {
    /// Data hazard (`RAW`).
    Data,
    /// Control hazard (`Control`).
    Control,
    /// Any other reported kind, lower-cased. Not styled by the overlay.
    Other(String),
}

impl HazardKind {
    /// Classifies a hazard type string.
    ///
    /// `raw` and `data` are data hazards, `control` is a control hazard; comparison is
    /// case-insensitive.
    pub fn classify(text: &str) -> Self {
        let lowered = text.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "raw" | "data" => Self::Data,
            "control" => Self::Control,
            _ => Self::Other(lowered),
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => f.write_str("data"),
            Self::Control => f.write_str("control"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

/// A hazard reported in one stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hazard {
    /// Stage the hazard is reported in.
    pub stage: Stage,
    /// Normalized kind.
    pub kind: HazardKind,
}

/// A same-cycle bypass from one stage to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardingEdge {
    /// Producing stage.
    pub from: Stage,
    /// Consuming stage.
    pub to: Stage,
}

/// 1-bit branch predictor state, keyed by program counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictorTables {
    /// Pattern History Table: PC -> predicted taken.
    pub pht: BTreeMap<u32, bool>,
    /// Branch Target Buffer: PC -> predicted target.
    pub btb: BTreeMap<u32, u32>,
}

impl PredictorTables {
    /// Returns `true` if both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.pht.is_empty() && self.btb.is_empty()
    }
}

/// Normalized state of one simulated clock cycle.
///
/// Structured records fill `pipeline`, `hazards`, `forwarding` and `predictor`;
/// transcript blocks fill `block` and `writebacks` and leave the pipeline empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleSnapshot {
    /// 0-based position in the decoded sequence.
    pub index: usize,
    /// Cycle number printed by the simulator (`[CYCLE n]`), when known.
    pub cycle: Option<u64>,
    /// Stage occupancy.
    pub pipeline: PipelineView,
    /// Reported hazards, in source order.
    pub hazards: Vec<Hazard>,
    /// Forwarding edges, in source order.
    pub forwarding: Vec<ForwardingEdge>,
    /// Branch predictor tables.
    pub predictor: PredictorTables,
    /// Verbatim transcript block, for free-text output.
    pub block: Option<String>,
    /// Writebacks announced within this cycle, in textual order.
    pub writebacks: Vec<WritebackEvent>,
}

impl CycleSnapshot {
    /// Creates a snapshot for one transcript block.
    ///
    /// # Arguments
    ///
    /// * `index` - Position in the decoded sequence.
    /// * `cycle` - Cycle number from the block's marker, if it parsed.
    /// * `block` - Verbatim block text.
    /// * `writebacks` - Writebacks found in the block.
    pub fn from_block(
        index: usize,
        cycle: Option<u64>,
        block: String,
        writebacks: Vec<WritebackEvent>,
    ) -> Self {
        Self {
            index,
            cycle,
            block: Some(block),
            writebacks,
            ..Self::default()
        }
    }
}
