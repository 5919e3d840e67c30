//! `bq-core` — foundational types for the `boardq` admission scheduler.
//!
//! This crate is a dependency of every other `bq-*` crate.  It has no
//! `bq-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `GroupId`                              |
//! | [`class`]       | `PriorityClass` (0 = Wheelchair … 6 = Standby)        |
//! | [`capacity`]    | `GateCapacity`, `GateConfig`                          |
//! | [`error`]       | `BoardingError`, `BoardingResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod capacity;
pub mod class;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capacity::{GateCapacity, GateConfig};
pub use class::PriorityClass;
pub use error::{BoardingError, BoardingResult};
pub use ids::{GroupId, PassengerId};
