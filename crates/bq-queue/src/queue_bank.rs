//! `PriorityQueueBank` — one FIFO queue per priority class.
//!
//! # Representation
//!
//! Each queue is a `BTreeSet<PassengerId>`.  The registry assigns ids in
//! strictly increasing order and a passenger is enqueued at most once, so
//! ascending id order *is* arrival order.  That buys removal by identity at
//! any position for the same O(log n) as popping the head, which is what
//! pulling a whole group out of its queue needs: O(k log n) for k members,
//! with no scan-and-shift.

use std::collections::BTreeSet;
use std::ops::Bound;

use bq_core::{PassengerId, PriorityClass};

/// Waiting passengers, partitioned by class.
#[derive(Default, Debug)]
pub struct PriorityQueueBank {
    queues: [BTreeSet<PassengerId>; PriorityClass::COUNT],
}

impl PriorityQueueBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the tail of `class`'s queue.
    ///
    /// `passenger` must be newer than everything already queued in `class`
    /// for FIFO order to hold; ids from `PassengerRegistry::register` always
    /// are.  Returns `false` if the passenger was already queued there.
    pub fn enqueue(&mut self, class: PriorityClass, passenger: PassengerId) -> bool {
        debug_assert!(
            self.queues[class.index()].last().is_none_or(|&tail| tail <= passenger),
            "enqueue out of arrival order"
        );
        self.queues[class.index()].insert(passenger)
    }

    /// Highest-priority class at or below `start` with a non-empty queue.
    pub fn peek_next_non_empty(&self, start: PriorityClass) -> Option<PriorityClass> {
        PriorityClass::ALL[start.index()..]
            .iter()
            .copied()
            .find(|c| !self.queues[c.index()].is_empty())
    }

    /// Oldest waiting passenger in `class`, without removing it.
    pub fn head(&self, class: PriorityClass) -> Option<PassengerId> {
        self.queues[class.index()].first().copied()
    }

    /// Remove and return the oldest waiting passenger in `class`.
    pub fn dequeue_head(&mut self, class: PriorityClass) -> Option<PassengerId> {
        self.queues[class.index()].pop_first()
    }

    /// Remove `passenger` from `class`'s queue wherever it sits.
    ///
    /// Returns `false` if it was not queued there.
    pub fn remove_member(&mut self, class: PriorityClass, passenger: PassengerId) -> bool {
        self.queues[class.index()].remove(&passenger)
    }

    /// The passenger queued directly behind `after` in `class`, or the head
    /// when `after` is `None`.  `after` need not still be queued.
    ///
    /// This is the cursor a boarding round walks with: it can step past a
    /// deferred group member without dequeuing it.
    pub fn next_after(&self, class: PriorityClass, after: Option<PassengerId>) -> Option<PassengerId> {
        let lower = match after {
            Some(id) => Bound::Excluded(id),
            None     => Bound::Unbounded,
        };
        self.queues[class.index()]
            .range((lower, Bound::Unbounded))
            .next()
            .copied()
    }

    pub fn contains(&self, class: PriorityClass, passenger: PassengerId) -> bool {
        self.queues[class.index()].contains(&passenger)
    }

    /// Waiting passengers in `class`, oldest first.
    pub fn iter_class(&self, class: PriorityClass) -> impl Iterator<Item = PassengerId> + '_ {
        self.queues[class.index()].iter().copied()
    }

    pub fn size(&self, class: PriorityClass) -> usize {
        self.queues[class.index()].len()
    }

    /// Waiting passengers across all classes.
    pub fn total(&self) -> usize {
        self.queues.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(BTreeSet::is_empty)
    }
}
