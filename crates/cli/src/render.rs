//! Text rendering of replay data.
//!
//! Stage styles are shown as markers: `*` for a data hazard, `!` for a control hazard.

use rvviz_core::CycleSnapshot;
use rvviz_core::arch::RegisterFile;
use rvviz_core::overlay::{self, StageStyle};
use rvviz_core::sim::{ProgramListing, Step};

/// Prints all registers, two per line.
pub fn print_registers(registers: &RegisterFile) {
    let view = registers.snapshot();
    for pair in view.chunks(2) {
        let line: Vec<String> = pair
            .iter()
            .map(|(id, value)| format!("{:<4}({:>4}) = {value:#010x}", id.to_string(), id.abi_name()))
            .collect();
        println!("{}", line.join("    "));
    }
}

/// Prints one step, announcing restarts.
pub fn print_step(step: &Step) {
    match step {
        Step::Advanced(snapshot) => print_snapshot(snapshot),
        Step::Restarted(snapshot) => {
            println!("[*] Simulator re-run; starting from the first cycle.");
            print_snapshot(snapshot);
        }
        Step::Empty => println!("No cycles to step through."),
    }
}

/// Prints a snapshot: the verbatim block for transcripts, the overlay otherwise.
pub fn print_snapshot(snapshot: &CycleSnapshot) {
    if let Some(block) = &snapshot.block {
        println!("{block}");
        return;
    }

    let overlay = overlay::derive(snapshot);
    println!("-- cycle {} --", snapshot.index);
    let stages: Vec<String> = overlay
        .stages
        .iter()
        .map(|stage| {
            let marker = match stage.style() {
                StageStyle::Normal => "",
                StageStyle::DataHazard => "*",
                StageStyle::ControlHazard => "!",
            };
            format!("{}{marker}: {}", stage.stage, stage.slot)
        })
        .collect();
    println!("{}", stages.join(" | "));

    for arrow in &overlay.arrows {
        println!("  forward {} -> {}", arrow.from, arrow.to);
    }
    if !overlay.pht.is_empty() {
        println!("  PHT");
        for row in &overlay.pht {
            println!("    {:#010x}  {}", row.pc, row.bit);
        }
    }
    if !overlay.btb.is_empty() {
        println!("  BTB");
        for row in &overlay.btb {
            println!("    {:#010x} -> {:#010x}  pred {}", row.pc, row.target, row.bit);
        }
    }
}

/// Prints a program listing as a PC / machine-code table.
pub fn print_listing(listing: &ProgramListing) {
    println!("{:<12} Machine Code", "PC");
    for entry in listing.entries() {
        println!("{:<12} {}", entry.address, entry.encoding);
    }
}
