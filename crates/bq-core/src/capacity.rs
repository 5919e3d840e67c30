//! Gate capacity and construction-time configuration.
//!
//! # Design
//!
//! Capacity is a per-round budget, not a running total: every boarding round
//! starts with the full `GateCapacity` available, regardless of how many
//! passengers earlier rounds admitted.  Zero is unrepresentable, so a round
//! can always make progress when an ungrouped passenger is waiting.

use std::fmt;
use std::num::NonZeroU32;

use crate::BoardingError;

// ── GateCapacity ──────────────────────────────────────────────────────────────

/// Maximum number of passengers admitted by one boarding round.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateCapacity(NonZeroU32);

impl GateCapacity {
    /// Capacity a freshly built gate starts with.
    pub const DEFAULT: GateCapacity = GateCapacity(NonZeroU32::new(5).unwrap());

    /// Validate an externally supplied capacity.
    ///
    /// Fails with [`BoardingError::NotPositive`] for `value <= 0`.  Values
    /// above `u32::MAX` saturate; no gate could ever fill that many seats.
    pub fn new(value: i64) -> Result<GateCapacity, BoardingError> {
        if value <= 0 {
            return Err(BoardingError::NotPositive(value));
        }
        let clamped = u32::try_from(value).unwrap_or(u32::MAX);
        NonZeroU32::new(clamped)
            .map(GateCapacity)
            .ok_or(BoardingError::NotPositive(value))
    }

    /// The capacity as a passenger count.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get() as usize
    }
}

impl Default for GateCapacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GateCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── GateConfig ────────────────────────────────────────────────────────────────

/// Settings applied when a gate is constructed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateConfig {
    /// Per-round budget until the first `set_gate_capacity` call.
    pub initial_capacity: GateCapacity,
}

impl GateConfig {
    /// Config with an explicit starting capacity.
    pub fn with_capacity(initial_capacity: GateCapacity) -> Self {
        Self { initial_capacity }
    }
}
