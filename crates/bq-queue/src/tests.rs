//! Unit tests for bq-queue.

use bq_core::{GroupId, PassengerId, PriorityClass};

use crate::{BoardedSet, GroupIndex, PassengerRegistry, PriorityQueueBank};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Register `names` in `class` and queue them, returning their ids.
fn queue_all(
    registry: &mut PassengerRegistry,
    queues:   &mut PriorityQueueBank,
    class:    PriorityClass,
    names:    &[&str],
) -> Vec<PassengerId> {
    names
        .iter()
        .map(|name| {
            let id = registry.register(*name, class, None);
            assert!(queues.enqueue(class, id));
            id
        })
        .collect()
}

// ── PassengerRegistry ─────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut reg = PassengerRegistry::new();
        assert_eq!(reg.next_id(), PassengerId(0));
        let a = reg.register("Ana", PriorityClass::First, None);
        let b = reg.register("Ben", PriorityClass::Economy, Some(GroupId(3)));
        assert_eq!((a, b), (PassengerId(0), PassengerId(1)));
        assert_eq!(reg.next_id(), PassengerId(2));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn duplicate_names_get_distinct_ids() {
        let mut reg = PassengerRegistry::new();
        let a = reg.register("Sam", PriorityClass::Economy, None);
        let b = reg.register("Sam", PriorityClass::Economy, None);
        assert_ne!(a, b);
        assert_eq!(reg.get(a).unwrap().name, reg.get(b).unwrap().name);
    }

    #[test]
    fn get_returns_record() {
        let mut reg = PassengerRegistry::new();
        let id = reg.register("Cleo", PriorityClass::Standby, Some(GroupId(8)));
        let p = reg.get(id).unwrap();
        assert_eq!(p.class, PriorityClass::Standby);
        assert_eq!(p.group, Some(GroupId(8)));
        assert!(reg.get(PassengerId(99)).is_none());
    }
}

// ── GroupIndex ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod group_index {
    use super::*;

    #[test]
    fn append_creates_then_grows() {
        let mut idx = GroupIndex::new();
        idx.append(GroupId(7), PriorityClass::Business, PassengerId(0));
        idx.append(GroupId(7), PriorityClass::Business, PassengerId(3));
        let g = idx.find(GroupId(7)).unwrap();
        assert_eq!(g.members(), &[PassengerId(0), PassengerId(3)]);
        assert_eq!(g.class(), PriorityClass::Business);
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn class_is_fixed_by_first_member() {
        let mut idx = GroupIndex::new();
        idx.append(GroupId(1), PriorityClass::First, PassengerId(0));
        idx.append(GroupId(1), PriorityClass::Economy, PassengerId(1));
        assert_eq!(idx.class_of(GroupId(1)), Some(PriorityClass::First));
    }

    #[test]
    fn remove_returns_members() {
        let mut idx = GroupIndex::new();
        idx.append(GroupId(4), PriorityClass::Economy, PassengerId(2));
        let g = idx.remove(GroupId(4)).unwrap();
        assert_eq!(g.len(), 1);
        assert!(!idx.contains(GroupId(4)));
        assert!(idx.remove(GroupId(4)).is_none());
        assert!(idx.is_empty());
    }
}

// ── PriorityQueueBank ─────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_bank {
    use super::*;

    #[test]
    fn fifo_within_class() {
        let mut reg = PassengerRegistry::new();
        let mut q = PriorityQueueBank::new();
        let ids = queue_all(&mut reg, &mut q, PriorityClass::Economy, &["a", "b", "c"]);
        assert_eq!(q.dequeue_head(PriorityClass::Economy), Some(ids[0]));
        assert_eq!(q.dequeue_head(PriorityClass::Economy), Some(ids[1]));
        assert_eq!(q.head(PriorityClass::Economy), Some(ids[2]));
        assert_eq!(q.size(PriorityClass::Economy), 1);
    }

    #[test]
    fn fifo_survives_interleaved_classes() {
        let mut reg = PassengerRegistry::new();
        let mut q = PriorityQueueBank::new();
        let a = queue_all(&mut reg, &mut q, PriorityClass::Economy, &["a"]);
        let b = queue_all(&mut reg, &mut q, PriorityClass::First, &["b"]);
        let c = queue_all(&mut reg, &mut q, PriorityClass::Economy, &["c"]);
        let economy: Vec<_> = q.iter_class(PriorityClass::Economy).collect();
        assert_eq!(economy, vec![a[0], c[0]]);
        assert_eq!(q.iter_class(PriorityClass::First).collect::<Vec<_>>(), b);
    }

    #[test]
    fn peek_next_non_empty_scans_downward() {
        let mut reg = PassengerRegistry::new();
        let mut q = PriorityQueueBank::new();
        assert_eq!(q.peek_next_non_empty(PriorityClass::Wheelchair), None);

        queue_all(&mut reg, &mut q, PriorityClass::Business, &["a"]);
        queue_all(&mut reg, &mut q, PriorityClass::Standby, &["b"]);
        assert_eq!(q.peek_next_non_empty(PriorityClass::Wheelchair), Some(PriorityClass::Business));
        assert_eq!(q.peek_next_non_empty(PriorityClass::PremiumEconomy), Some(PriorityClass::Standby));
    }

    #[test]
    fn remove_member_from_middle() {
        let mut reg = PassengerRegistry::new();
        let mut q = PriorityQueueBank::new();
        let ids = queue_all(&mut reg, &mut q, PriorityClass::First, &["a", "b", "c"]);
        assert!(q.remove_member(PriorityClass::First, ids[1]));
        assert!(!q.remove_member(PriorityClass::First, ids[1]));
        assert_eq!(q.iter_class(PriorityClass::First).collect::<Vec<_>>(), vec![ids[0], ids[2]]);
    }

    #[test]
    fn next_after_walks_without_consuming() {
        let mut reg = PassengerRegistry::new();
        let mut q = PriorityQueueBank::new();
        let ids = queue_all(&mut reg, &mut q, PriorityClass::Economy, &["a", "b", "c"]);
        assert_eq!(q.next_after(PriorityClass::Economy, None), Some(ids[0]));
        assert_eq!(q.next_after(PriorityClass::Economy, Some(ids[0])), Some(ids[1]));
        // Cursor stays valid after its anchor is removed.
        q.remove_member(PriorityClass::Economy, ids[1]);
        assert_eq!(q.next_after(PriorityClass::Economy, Some(ids[1])), Some(ids[2]));
        assert_eq!(q.next_after(PriorityClass::Economy, Some(ids[2])), None);
        assert_eq!(q.total(), 2);
    }

    #[test]
    fn enqueue_twice_is_rejected() {
        let mut q = PriorityQueueBank::new();
        assert!(q.enqueue(PriorityClass::First, PassengerId(0)));
        assert!(!q.enqueue(PriorityClass::First, PassengerId(0)));
        assert_eq!(q.size(PriorityClass::First), 1);
    }
}

// ── BoardedSet ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boarded {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = BoardedSet::new();
        assert!(set.insert(PassengerId(1)));
        assert!(!set.insert(PassengerId(1)));
        assert!(set.contains(PassengerId(1)));
        assert!(!set.contains(PassengerId(2)));
        assert_eq!(set.len(), 1);
    }
}
