//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! `PassengerId` is assigned by the registry at check-in, in strictly
//! increasing order, and doubles as the index into the registry's SoA
//! arrays.  Passenger names are display labels and may repeat; every
//! cross-structure lookup (queues, groups, boarded set) goes through the id.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Synthetic passenger identity, unique per `Gate` instance.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Caller-chosen group identifier.  Always positive; the external "0"
    /// meaning "no group" is represented as `Option::<GroupId>::None`.
    pub struct GroupId(u32);
}

impl GroupId {
    /// Interpret an external group number: `0` means "ungrouped".
    #[inline]
    pub fn from_raw(raw: u32) -> Option<GroupId> {
        (raw != 0).then_some(GroupId(raw))
    }

    /// The external representation, with `None` mapped back to `0`.
    #[inline]
    pub fn raw(group: Option<GroupId>) -> u32 {
        group.map_or(0, |g| g.0)
    }
}
