//! Architectural register identifiers.
//!
//! This module defines the `RegisterId` newtype for the 32 integer registers. It provides:
//! 1. **Validation:** Only indices `0..32` can be constructed.
//! 2. **Parsing:** Conversion from simulator text (`x10`).
//! 3. **Naming:** Both the numeric (`x2`) and ABI (`sp`) spellings for display.

use std::fmt;

/// Number of integer registers.
pub const NUM_REGISTERS: usize = 32;

/// RISC-V ABI names indexed by register number.
const ABI_NAMES: [&str; NUM_REGISTERS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Identifier of one of the integer registers `x0`-`x31`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegisterId(u8);

impl RegisterId {
    /// Register `x0` (zero).
    pub const ZERO: Self = Self(0);
    /// Register `x1` (return address).
    pub const RA: Self = Self(1);
    /// Register `x2` (stack pointer).
    pub const SP: Self = Self(2);

    /// Creates a register identifier from its index.
    ///
    /// # Returns
    ///
    /// `None` if `index` is not below [`NUM_REGISTERS`].
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_REGISTERS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Parses the simulator spelling `x<n>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvviz_core::common::RegisterId;
    ///
    /// assert_eq!(RegisterId::parse("x10").map(RegisterId::index), Some(10));
    /// assert_eq!(RegisterId::parse("x32"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('x')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<usize>().ok().and_then(Self::new)
    }

    /// Register index in `0..32`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// ABI mnemonic (`zero`, `ra`, `sp`, ...).
    pub const fn abi_name(self) -> &'static str {
        ABI_NAMES[self.0 as usize]
    }

    /// Iterates over all registers in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_REGISTERS as u8).map(Self)
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
