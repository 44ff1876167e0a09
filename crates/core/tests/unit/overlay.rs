//! # Overlay Tests
//!
//! Hazard styling precedence, forwarding arrows and the predictor join.

use pretty_assertions::assert_eq;
use rvviz_core::CycleSnapshot;
use rvviz_core::overlay::{BtbRow, PhtRow, StageStyle, derive, join_predictor};
use rvviz_core::trace::decode::record::decode_structured_stream;
use rvviz_core::trace::snapshot::{ForwardingEdge, Hazard, HazardKind, PredictorTables, Stage};

use crate::common::fixtures::RECORD_STREAM;

fn hazard(stage: Stage, kind: HazardKind) -> Hazard {
    Hazard { stage, kind }
}

#[test]
fn predictor_join_defaults_missing_bit_to_zero() {
    let mut tables = PredictorTables::default();
    let _ = tables.pht.insert(0x10, true);
    let _ = tables.btb.insert(0x10, 0x20);
    let _ = tables.btb.insert(0x14, 0x30);

    assert_eq!(
        join_predictor(&tables),
        [
            BtbRow { pc: 0x10, target: 0x20, bit: 1 },
            BtbRow { pc: 0x14, target: 0x30, bit: 0 },
        ]
    );
}

#[test]
fn control_styling_wins_over_data() {
    let snapshot = CycleSnapshot {
        hazards: vec![
            hazard(Stage::Ex, HazardKind::Control),
            hazard(Stage::Ex, HazardKind::Data),
            hazard(Stage::Id, HazardKind::Data),
            hazard(Stage::Mem, HazardKind::Other("waw".to_owned())),
        ],
        ..CycleSnapshot::default()
    };
    let overlay = derive(&snapshot);

    assert!(overlay.stage(Stage::Ex).data_hazard);
    assert!(overlay.stage(Stage::Ex).control_hazard);
    assert_eq!(overlay.stage(Stage::Ex).style(), StageStyle::ControlHazard);
    assert_eq!(overlay.stage(Stage::Id).style(), StageStyle::DataHazard);
    assert_eq!(overlay.stage(Stage::Mem).style(), StageStyle::Normal);
    assert_eq!(overlay.data_hazard_stages(), [Stage::Id, Stage::Ex]);
    assert_eq!(overlay.control_hazard_stages(), [Stage::Ex]);
}

#[test]
fn derived_from_records() {
    let snapshots = decode_structured_stream(RECORD_STREAM).unwrap();

    let second = derive(&snapshots[1]);
    assert_eq!(second.stage(Stage::Id).style(), StageStyle::DataHazard);
    assert_eq!(second.stage(Stage::Id).slot.to_string(), "addi x1,x0,5");
    assert_eq!(second.arrows, [ForwardingEdge { from: Stage::Ex, to: Stage::Id }]);
    assert!(second.pht.is_empty() && second.btb.is_empty());

    let third = derive(&snapshots[2]);
    assert_eq!(third.stage(Stage::If).style(), StageStyle::ControlHazard);
    assert_eq!(third.stage(Stage::Mem).slot.to_string(), "---");
    assert_eq!(third.pht, [PhtRow { pc: 0x10, bit: 1 }]);
    assert_eq!(
        third.btb,
        [
            BtbRow { pc: 0x10, target: 0x20, bit: 1 },
            BtbRow { pc: 0x14, target: 0x30, bit: 0 },
        ]
    );
}

#[test]
fn stage_order_is_fixed() {
    let overlay = derive(&CycleSnapshot::default());
    let stages: Vec<Stage> = overlay.stages.iter().map(|s| s.stage).collect();
    assert_eq!(stages, Stage::ALL);
    assert!(overlay.arrows.is_empty());
}
