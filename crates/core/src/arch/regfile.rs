//! Register File Model.
//!
//! This module implements the 32-entry register store shown alongside the replay.
//! It performs the following:
//! 1. **Power-on defaults:** `x2` (sp) starts at `0x7FFFFFF0`, every other register at zero.
//! 2. **Writeback replay:** Values change only by applying a [`WritebackEvent`].
//! 3. **Observation:** An index-ordered view of all 32 values for display.
//!
//! `x0` is not hardwired here. The simulator never announces a write to `x0`, so a
//! writeback naming it is applied as-is and reported with a warning.

use tracing::warn;

use crate::common::reg::{NUM_REGISTERS, RegisterId};

/// Power-on value of the stack pointer.
pub const DEFAULT_SP: u32 = 0x7FFF_FFF0;

/// Power-on value of the return address register.
pub const DEFAULT_RA: u32 = 0;

/// A single `register <- value` update announced by the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WritebackEvent {
    /// Destination register.
    pub register: RegisterId,
    /// 32-bit value written.
    pub value: u32,
}

impl WritebackEvent {
    /// Creates a writeback event.
    pub const fn new(register: RegisterId, value: u32) -> Self {
        Self { register, value }
    }
}

/// Register file holding the 32 integer registers as last announced by the simulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file at its power-on defaults.
    ///
    /// # Returns
    ///
    /// A new `RegisterFile` equivalent to one that has just been [`initialize`](Self::initialize)d.
    pub fn new() -> Self {
        let mut file = Self {
            regs: [0; NUM_REGISTERS],
        };
        file.initialize();
        file
    }

    /// Restores the power-on defaults.
    pub fn initialize(&mut self) {
        self.regs = [0; NUM_REGISTERS];
        self.regs[RegisterId::RA.index()] = DEFAULT_RA;
        self.regs[RegisterId::SP.index()] = DEFAULT_SP;
    }

    /// Applies a writeback, unconditionally overwriting the named register.
    ///
    /// # Arguments
    ///
    /// * `event` - The announced register write.
    pub fn apply(&mut self, event: WritebackEvent) {
        if event.register == RegisterId::ZERO && event.value != 0 {
            warn!(value = event.value, "writeback to x0 applied");
        }
        self.regs[event.register.index()] = event.value;
    }

    /// Applies a sequence of writebacks in order, so later writes to a register win.
    pub fn apply_all<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a WritebackEvent>,
    {
        for event in events {
            self.apply(*event);
        }
    }

    /// Reads one register.
    pub const fn read(&self, register: RegisterId) -> u32 {
        self.regs[register.index()]
    }

    /// Returns every register value ordered by index `x0..x31`.
    pub fn snapshot(&self) -> [(RegisterId, u32); NUM_REGISTERS] {
        let mut view = [(RegisterId::ZERO, 0); NUM_REGISTERS];
        for (slot, id) in view.iter_mut().zip(RegisterId::all()) {
            *slot = (id, self.regs[id.index()]);
        }
        view
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
