//! Overlay derivation.
//!
//! Pure functions turning a [`CycleSnapshot`] into what the pipeline view draws. It performs:
//! 1. **Hazard marking:** Per stage, whether a data and/or a control hazard was reported.
//!    Both are checked independently; control styling is applied after data styling, so
//!    it wins when a stage has both.
//! 2. **Forwarding arrows:** Stage-to-stage edges in report order.
//! 3. **Predictor view:** PHT rows, and BTB rows joined with the PHT bit of the same PC
//!    (0 when the PC has no PHT entry).

use crate::trace::snapshot::{
    CycleSnapshot, ForwardingEdge, Hazard, HazardKind, PredictorTables, Stage, StageSlot,
};

/// Visual treatment of one stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StageStyle {
    /// No hazard.
    #[default]
    Normal,
    /// Data hazard only.
    DataHazard,
    /// Control hazard (with or without a data hazard).
    ControlHazard,
}

/// Overlay for one pipeline stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageOverlay {
    /// The stage.
    pub stage: Stage,
    /// Its occupant.
    pub slot: StageSlot,
    /// A data hazard is reported in this stage.
    pub data_hazard: bool,
    /// A control hazard is reported in this stage.
    pub control_hazard: bool,
}

impl StageOverlay {
    /// Resolves the style: data first, then control on top.
    pub const fn style(&self) -> StageStyle {
        let mut style = StageStyle::Normal;
        if self.data_hazard {
            style = StageStyle::DataHazard;
        }
        if self.control_hazard {
            style = StageStyle::ControlHazard;
        }
        style
    }
}

/// One Pattern History Table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhtRow {
    /// Branch program counter.
    pub pc: u32,
    /// Prediction bit (1 = taken).
    pub bit: u8,
}

/// One Branch Target Buffer row joined with its prediction bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BtbRow {
    /// Branch program counter.
    pub pc: u32,
    /// Predicted target.
    pub target: u32,
    /// PHT prediction bit for `pc`, 0 if absent.
    pub bit: u8,
}

/// Everything drawn on top of one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    /// Per-stage overlays in pipeline order.
    pub stages: [StageOverlay; 5],
    /// Forwarding arrows.
    pub arrows: Vec<ForwardingEdge>,
    /// Pattern History Table rows, ordered by PC.
    pub pht: Vec<PhtRow>,
    /// Branch Target Buffer rows, ordered by PC.
    pub btb: Vec<BtbRow>,
}

impl Overlay {
    /// Overlay for `stage`.
    pub const fn stage(&self, stage: Stage) -> &StageOverlay {
        &self.stages[stage.position()]
    }

    /// Stages carrying a data hazard.
    pub fn data_hazard_stages(&self) -> Vec<Stage> {
        self.stages
            .iter()
            .filter(|overlay| overlay.data_hazard)
            .map(|overlay| overlay.stage)
            .collect()
    }

    /// Stages carrying a control hazard.
    pub fn control_hazard_stages(&self) -> Vec<Stage> {
        self.stages
            .iter()
            .filter(|overlay| overlay.control_hazard)
            .map(|overlay| overlay.stage)
            .collect()
    }
}

/// Derives the overlay for a snapshot.
///
/// # Arguments
///
/// * `snapshot` - The cycle to draw.
///
/// # Returns
///
/// Stage styles, forwarding arrows and predictor rows.
pub fn derive(snapshot: &CycleSnapshot) -> Overlay {
    let stages = Stage::ALL.map(|stage| StageOverlay {
        stage,
        slot: snapshot.pipeline.get(stage).clone(),
        data_hazard: has_hazard(&snapshot.hazards, stage, &HazardKind::Data),
        control_hazard: has_hazard(&snapshot.hazards, stage, &HazardKind::Control),
    });
    Overlay {
        stages,
        arrows: snapshot.forwarding.clone(),
        pht: pht_rows(&snapshot.predictor),
        btb: join_predictor(&snapshot.predictor),
    }
}

fn has_hazard(hazards: &[Hazard], stage: Stage, kind: &HazardKind) -> bool {
    hazards
        .iter()
        .any(|hazard| hazard.stage == stage && hazard.kind == *kind)
}

/// Lists the Pattern History Table.
pub fn pht_rows(tables: &PredictorTables) -> Vec<PhtRow> {
    tables
        .pht
        .iter()
        .map(|(&pc, &taken)| PhtRow {
            pc,
            bit: u8::from(taken),
        })
        .collect()
}

/// Joins every BTB entry with the PHT bit of the same PC.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use rvviz_core::overlay::{BtbRow, join_predictor};
/// use rvviz_core::trace::snapshot::PredictorTables;
///
/// let tables = PredictorTables {
///     pht: BTreeMap::from([(0x10, true)]),
///     btb: BTreeMap::from([(0x10, 0x20), (0x14, 0x30)]),
/// };
///
/// assert_eq!(
///     join_predictor(&tables),
///     [
///         BtbRow { pc: 0x10, target: 0x20, bit: 1 },
///         BtbRow { pc: 0x14, target: 0x30, bit: 0 },
///     ]
/// );
/// ```
pub fn join_predictor(tables: &PredictorTables) -> Vec<BtbRow> {
    tables
        .btb
        .iter()
        .map(|(&pc, &target)| BtbRow {
            pc,
            target,
            bit: tables.pht.get(&pc).copied().map_or(0, u8::from),
        })
        .collect()
}
