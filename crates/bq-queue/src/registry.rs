//! Passenger records, owned by an append-only arena.
//!
//! A `PassengerId` is the record's position in the arena.  Records are never
//! removed: a boarded passenger is "destroyed" logically by being dropped from
//! its queue and group, while the record stays addressable for display and
//! for `BoardedSet` lookups.

use bq_core::{GroupId, PassengerId, PriorityClass};

/// One checked-in passenger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:    PassengerId,
    /// Display label only; two passengers may share a name.
    pub name:  String,
    pub class: PriorityClass,
    pub group: Option<GroupId>,
}

/// Arena of every passenger ever checked in, indexed by `PassengerId`.
#[derive(Default, Debug)]
pub struct PassengerRegistry {
    passengers: Vec<Passenger>,
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record and return its freshly assigned id.
    ///
    /// Ids are handed out in strictly increasing order, which the queue bank
    /// relies on for FIFO ordering.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` passengers are registered.
    pub fn register(
        &mut self,
        name:  impl Into<String>,
        class: PriorityClass,
        group: Option<GroupId>,
    ) -> PassengerId {
        let id = PassengerId::try_from(self.passengers.len())
            .expect("passenger id space exhausted");
        self.passengers.push(Passenger { id, name: name.into(), class, group });
        id
    }

    /// The id the next `register` call will return.
    pub fn next_id(&self) -> PassengerId {
        PassengerId(self.passengers.len() as u32)
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// All records in check-in order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.passengers.iter()
    }
}
