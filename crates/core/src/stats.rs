//! Replay statistics.
//!
//! Summary counters over a decoded cycle sequence. It tracks:
//! 1. **Cycles:** Snapshots in the run and how many structured records had every stage empty.
//! 2. **Writebacks:** Register writes announced inside cycle blocks.
//! 3. **Hazards:** Data, control and other hazard reports.
//! 4. **Forwarding:** Bypass edges across all cycles.

use std::fmt;

use crate::trace::snapshot::{CycleSnapshot, HazardKind};

/// Counters over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Number of cycle snapshots.
    pub cycles: usize,
    /// Structured cycles with no instruction in any stage, whether the stages were
    /// absent, `null` or printed as `---`.
    pub idle_cycles: usize,
    /// Writebacks announced inside cycle blocks.
    pub writebacks: usize,
    /// Data hazard reports.
    pub data_hazards: usize,
    /// Control hazard reports.
    pub control_hazards: usize,
    /// Hazard reports of any other kind.
    pub other_hazards: usize,
    /// Forwarding edges.
    pub forwarding_edges: usize,
}

impl ReplayStats {
    /// Collects counters over `snapshots`.
    pub fn collect(snapshots: &[CycleSnapshot]) -> Self {
        let mut stats = Self {
            cycles: snapshots.len(),
            ..Self::default()
        };
        for snapshot in snapshots {
            if snapshot.block.is_none() && snapshot.pipeline.is_idle() {
                stats.idle_cycles += 1;
            }
            stats.writebacks += snapshot.writebacks.len();
            stats.forwarding_edges += snapshot.forwarding.len();
            for hazard in &snapshot.hazards {
                match hazard.kind {
                    HazardKind::Data => stats.data_hazards += 1,
                    HazardKind::Control => stats.control_hazards += 1,
                    HazardKind::Other(_) => stats.other_hazards += 1,
                }
            }
        }
        stats
    }

    /// Total hazard reports.
    pub const fn hazards(&self) -> usize {
        self.data_hazards + self.control_hazards + self.other_hazards
    }
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "replay_cycles            {}", self.cycles)?;
        writeln!(f, "replay_idle_cycles       {}", self.idle_cycles)?;
        writeln!(f, "replay_writebacks        {}", self.writebacks)?;
        writeln!(f, "hazards_data             {}", self.data_hazards)?;
        writeln!(f, "hazards_control          {}", self.control_hazards)?;
        writeln!(f, "hazards_other            {}", self.other_hazards)?;
        write!(f, "forwarding_edges         {}", self.forwarding_edges)
    }
}
