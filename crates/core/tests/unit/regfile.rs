//! # Register File Tests
//!
//! Power-on defaults, writeback application, and the last-write-wins property
//! when replaying transcript announcements.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rvviz_core::arch::{RegisterFile, WritebackEvent};
use rvviz_core::common::RegisterId;
use rvviz_core::trace::decode::transcript::extract_writebacks;

fn reg(index: usize) -> RegisterId {
    RegisterId::new(index).unwrap()
}

#[test]
fn defaults_after_initialize() {
    let mut regs = RegisterFile::new();
    regs.apply(WritebackEvent::new(reg(2), 1));
    regs.apply(WritebackEvent::new(reg(7), 99));
    regs.initialize();

    assert_eq!(regs.read(RegisterId::ZERO), 0);
    assert_eq!(regs.read(RegisterId::RA), 0);
    assert_eq!(regs.read(RegisterId::SP), 0x7FFF_FFF0);
    for index in 3..32 {
        assert_eq!(regs.read(reg(index)), 0, "x{index}");
    }
}

#[test]
fn snapshot_is_index_ordered() {
    let mut regs = RegisterFile::new();
    regs.apply(WritebackEvent::new(reg(31), 31));
    regs.apply(WritebackEvent::new(reg(4), 4));

    let view = regs.snapshot();
    let indices: Vec<usize> = view.iter().map(|(id, _)| id.index()).collect();
    assert_eq!(indices, (0..32).collect::<Vec<_>>());
    assert_eq!(view[31].1, 31);
    assert_eq!(view[4].1, 4);
}

#[test]
fn x0_is_not_pinned() {
    let mut regs = RegisterFile::new();
    regs.apply(WritebackEvent::new(RegisterId::ZERO, 0x1234));
    assert_eq!(regs.read(RegisterId::ZERO), 0x1234);
}

#[test]
fn later_writeback_wins() {
    let mut regs = RegisterFile::new();
    regs.apply_all(&extract_writebacks("Writing 0x1 to x5\n...\nWriting 0x2 to x5\n"));
    assert_eq!(regs.read(reg(5)), 0x2);
}

#[test]
fn malformed_value_leaves_register_unchanged() {
    let mut regs = RegisterFile::new();
    regs.apply(WritebackEvent::new(reg(3), 0x77));
    regs.apply_all(&extract_writebacks("Writing 0xZZ to x3\nWriting 0x100000000 to x3\n"));
    assert_eq!(regs.read(reg(3)), 0x77);
}

proptest! {
    #[test]
    fn replay_matches_sequential_model(
        writes in prop::collection::vec((0usize..32, any::<u32>()), 0..64)
    ) {
        let text: String = writes
            .iter()
            .map(|(r, v)| format!("[WRITEBACK] Writing {v:#x} to x{r}\n"))
            .collect();

        let mut regs = RegisterFile::new();
        regs.apply_all(&extract_writebacks(&text));

        let mut model = RegisterFile::new().snapshot().map(|(_, value)| value);
        for &(r, v) in &writes {
            model[r] = v;
        }
        for (id, value) in regs.snapshot() {
            prop_assert_eq!(value, model[id.index()]);
        }
    }
}
