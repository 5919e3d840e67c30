//! `GroupIndex` — group id → ordered member list.
//!
//! A pure lookup structure.  It does not check that appended members share
//! the group's class; the gate validates that before calling [`GroupIndex::append`].

use rustc_hash::FxHashMap;

use bq_core::{GroupId, PassengerId, PriorityClass};

/// Members of one group, in check-in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    class:   PriorityClass,
    members: Vec<PassengerId>,
}

impl Group {
    /// The class every member was checked in with.
    #[inline]
    pub fn class(&self) -> PriorityClass {
        self.class
    }

    #[inline]
    pub fn members(&self) -> &[PassengerId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// All unresolved groups.
#[derive(Default, Debug)]
pub struct GroupIndex {
    inner: FxHashMap<GroupId, Group>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, group: GroupId) -> Option<&Group> {
        self.inner.get(&group)
    }

    pub fn contains(&self, group: GroupId) -> bool {
        self.inner.contains_key(&group)
    }

    /// Class established by the group's first member, if the group exists.
    pub fn class_of(&self, group: GroupId) -> Option<PriorityClass> {
        self.inner.get(&group).map(Group::class)
    }

    /// Append `passenger` to `group`, creating the group with `class` if it
    /// does not exist yet.  For an existing group `class` is ignored.
    pub fn append(&mut self, group: GroupId, class: PriorityClass, passenger: PassengerId) {
        self.inner
            .entry(group)
            .or_insert_with(|| Group { class, members: Vec::new() })
            .members
            .push(passenger);
    }

    /// Drop the group, returning its members.
    pub fn remove(&mut self, group: GroupId) -> Option<Group> {
        self.inner.remove(&group)
    }

    /// Number of unresolved groups.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
