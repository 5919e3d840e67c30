//! The `Gate` struct: one independent boarding gate and its state.

use tracing::{debug, info};

use bq_core::{
    BoardingError, BoardingResult, GateCapacity, GateConfig, GroupId, PassengerId, PriorityClass,
};
use bq_queue::{BoardedSet, Group, GroupIndex, Passenger, PassengerRegistry, PriorityQueueBank};

use crate::{CheckInConfirmation, StatusReport};

/// A single boarding gate.
///
/// Owns the passenger registry, group index, per-class queues, boarded set,
/// and the configured per-round capacity.  There is no global state: any
/// number of gates can coexist.
///
/// # Invariants (maintained by every `&mut self` method)
///
/// - Every unboarded passenger sits in exactly one queue, its class's.
/// - No boarded passenger is queued.
/// - Every member of a group in the index shares the group's class and is
///   still queued.
#[derive(Debug)]
pub struct Gate {
    pub(crate) registry: PassengerRegistry,
    pub(crate) groups:   GroupIndex,
    pub(crate) queues:   PriorityQueueBank,
    pub(crate) boarded:  BoardedSet,
    pub(crate) capacity: GateCapacity,
}

impl Default for Gate {
    fn default() -> Self {
        Self::with_config(GateConfig::default())
    }
}

impl Gate {
    /// An empty gate with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GateConfig) -> Self {
        Self {
            registry: PassengerRegistry::new(),
            groups:   GroupIndex::new(),
            queues:   PriorityQueueBank::new(),
            boarded:  BoardedSet::new(),
            capacity: config.initial_capacity,
        }
    }

    // ── Check-in ──────────────────────────────────────────────────────────

    /// Check a passenger in from raw caller input.
    ///
    /// `class` must be in `0..=6`; `group == 0` means ungrouped.  On error
    /// nothing is recorded.
    pub fn check_in(
        &mut self,
        name:  impl Into<String>,
        class: i64,
        group: u32,
    ) -> BoardingResult<CheckInConfirmation> {
        let class = PriorityClass::try_from(class)?;
        self.check_in_as(name, class, GroupId::from_raw(group))
    }

    /// Typed form of [`check_in`](Self::check_in).
    ///
    /// Fails with [`BoardingError::GroupClassMismatch`] if `group` already
    /// exists with a different class.
    pub fn check_in_as(
        &mut self,
        name:  impl Into<String>,
        class: PriorityClass,
        group: Option<GroupId>,
    ) -> BoardingResult<CheckInConfirmation> {
        // Validate before touching anything.
        if let Some(g) = group {
            if let Some(group_class) = self.groups.class_of(g) {
                if group_class != class {
                    return Err(BoardingError::GroupClassMismatch {
                        group: g,
                        group_class,
                        requested: class,
                    });
                }
            }
        }

        let name = name.into();
        let id = self.registry.register(name.clone(), class, group);
        if let Some(g) = group {
            self.groups.append(g, class, id);
        }
        self.queues.enqueue(class, id);

        debug!(passenger = %id, %name, %class, group = GroupId::raw(group), "checked in");
        Ok(CheckInConfirmation { passenger: id, name, class, group })
    }

    // ── Capacity ──────────────────────────────────────────────────────────

    /// Replace the per-round capacity.  Non-positive values are rejected and
    /// the previous capacity is kept.
    pub fn set_gate_capacity(&mut self, value: i64) -> BoardingResult<()> {
        let capacity = GateCapacity::new(value)?;
        info!(from = %self.capacity, to = %capacity, "gate capacity changed");
        self.capacity = capacity;
        Ok(())
    }

    #[inline]
    pub fn gate_capacity(&self) -> GateCapacity {
        self.capacity
    }

    // ── Status ────────────────────────────────────────────────────────────

    /// Per-class waiting counts, totals, and capacity.  Pure read.
    pub fn snapshot(&self) -> StatusReport {
        let waiting = PriorityClass::ALL.map(|c| self.queues.size(c));
        StatusReport {
            waiting,
            total_waiting: waiting.iter().sum(),
            total_boarded: self.boarded.len(),
            gate_capacity: self.capacity,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.registry.get(id)
    }

    pub fn is_boarded(&self, id: PassengerId) -> bool {
        self.boarded.contains(id)
    }

    /// Members of an unresolved group, in check-in order.  `None` once the
    /// group has boarded (or if it never existed).
    pub fn group_members(&self, group: GroupId) -> Option<&[PassengerId]> {
        self.groups.find(group).map(Group::members)
    }

    /// Waiting passengers in `class`, oldest first.
    pub fn waiting(&self, class: PriorityClass) -> impl Iterator<Item = PassengerId> + '_ {
        self.queues.iter_class(class)
    }

    /// Number of passengers ever checked in.
    pub fn checked_in(&self) -> usize {
        self.registry.len()
    }
}
