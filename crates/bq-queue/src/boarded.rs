//! `BoardedSet` — every passenger admitted so far.
//!
//! Grows monotonically: there is no removal API.

use rustc_hash::FxHashSet;

use bq_core::PassengerId;

#[derive(Default, Debug)]
pub struct BoardedSet {
    inner: FxHashSet<PassengerId>,
}

impl BoardedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `passenger` as boarded.  Returns `false` if it already was.
    pub fn insert(&mut self, passenger: PassengerId) -> bool {
        self.inner.insert(passenger)
    }

    #[inline]
    pub fn contains(&self, passenger: PassengerId) -> bool {
        self.inner.contains(&passenger)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
