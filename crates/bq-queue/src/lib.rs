//! `bq-queue` — the data layer of the boarding gate.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`registry`]    | `Passenger`, `PassengerRegistry` (id-indexed arena)       |
//! | [`group_index`] | `Group`, `GroupIndex` (`FxHashMap<GroupId, Group>`)       |
//! | [`queue_bank`]  | `PriorityQueueBank` (one `BTreeSet<PassengerId>` per class) |
//! | [`boarded`]     | `BoardedSet` (monotonic set of admitted passengers)       |
//!
//! # Ownership model
//!
//! The registry owns every `Passenger` record.  Groups, queues, and the
//! boarded set hold only `PassengerId` handles into it, so one passenger can
//! be referenced from several structures without shared ownership.
//!
//! None of these structures enforce admission policy; `bq-gate` composes
//! them and owns every cross-structure invariant.

pub mod boarded;
pub mod group_index;
pub mod queue_bank;
pub mod registry;

#[cfg(test)]
mod tests;

pub use boarded::BoardedSet;
pub use group_index::{Group, GroupIndex};
pub use queue_bank::PriorityQueueBank;
pub use registry::{Passenger, PassengerRegistry};
