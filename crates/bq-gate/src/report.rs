//! Data returned to the caller by gate operations, for display.

use bq_core::{GateCapacity, GroupId, PassengerId, PriorityClass};

// ── Check-in ──────────────────────────────────────────────────────────────────

/// Outcome of a successful check-in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckInConfirmation {
    pub passenger: PassengerId,
    pub name:      String,
    pub class:     PriorityClass,
    pub group:     Option<GroupId>,
}

impl CheckInConfirmation {
    pub fn class_name(&self) -> &'static str {
        self.class.as_str()
    }

    /// Group number as the caller supplied it, `0` when ungrouped.
    pub fn group_number(&self) -> u32 {
        GroupId::raw(self.group)
    }
}

// ── Boarding round ────────────────────────────────────────────────────────────

/// One admitted passenger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardingEvent {
    pub passenger: PassengerId,
    pub name:      String,
    pub class:     PriorityClass,
    /// Set when the passenger boarded as part of a group.
    pub group:     Option<GroupId>,
}

/// Everything one boarding round did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardingReport {
    /// Admissions in boarding order.  Members of one group are contiguous.
    pub events:   Vec<BoardingEvent>,
    /// Equals `events.len()`; never exceeds the round's capacity.
    pub admitted: usize,
    /// Groups that were reached but did not fit the remaining budget, in the
    /// order they were first reached.  They are still fully queued.
    pub deferred: Vec<GroupId>,
}

impl BoardingReport {
    pub fn nothing_admitted(&self) -> bool {
        self.admitted == 0
    }

    /// Passenger ids in boarding order.
    pub fn passengers(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.events.iter().map(|e| e.passenger)
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Read-only aggregate of queue and boarding state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusReport {
    /// Waiting passengers per class, indexed by `PriorityClass::index()`.
    pub waiting:       [usize; PriorityClass::COUNT],
    pub total_waiting: usize,
    pub total_boarded: usize,
    pub gate_capacity: GateCapacity,
}

impl StatusReport {
    #[inline]
    pub fn waiting_in(&self, class: PriorityClass) -> usize {
        self.waiting[class.index()]
    }
}
