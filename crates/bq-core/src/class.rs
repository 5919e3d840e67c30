//! Priority classes, highest first.
//!
//! The discriminant is the queue index: class 0 is scanned first by every
//! boarding round, class 6 last.

use crate::BoardingError;

/// The seven strict-priority passenger classes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PriorityClass {
    /// Mobility assistance; always boards first.
    Wheelchair     = 0,
    First          = 1,
    Business       = 2,
    PremiumEconomy = 3,
    EconomyPlus    = 4,
    Economy        = 5,
    /// Lowest priority.
    Standby        = 6,
}

impl PriorityClass {
    /// Number of classes (and therefore of queues in the queue bank).
    pub const COUNT: usize = 7;

    /// All classes in boarding order.
    pub const ALL: [PriorityClass; Self::COUNT] = [
        PriorityClass::Wheelchair,
        PriorityClass::First,
        PriorityClass::Business,
        PriorityClass::PremiumEconomy,
        PriorityClass::EconomyPlus,
        PriorityClass::Economy,
        PriorityClass::Standby,
    ];

    /// Queue index, `0..COUNT`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).  `None` for `i >= COUNT`.
    #[inline]
    pub fn from_index(i: usize) -> Option<PriorityClass> {
        Self::ALL.get(i).copied()
    }

    /// Human-readable label shown by status and check-in output.
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityClass::Wheelchair     => "Wheelchair",
            PriorityClass::First          => "First Class",
            PriorityClass::Business       => "Business Class",
            PriorityClass::PremiumEconomy => "Premium Economy",
            PriorityClass::EconomyPlus    => "Economy Plus",
            PriorityClass::Economy        => "Economy",
            PriorityClass::Standby        => "Standby",
        }
    }
}

impl TryFrom<i64> for PriorityClass {
    type Error = BoardingError;

    fn try_from(raw: i64) -> Result<PriorityClass, BoardingError> {
        usize::try_from(raw)
            .ok()
            .and_then(PriorityClass::from_index)
            .ok_or(BoardingError::InvalidClass(raw))
    }
}

impl std::fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
