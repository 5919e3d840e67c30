//! `bq-gate` — the boarding gate: check-in, capacity, boarding rounds, status.
//!
//! # Boarding round
//!
//! ```text
//! admitted = 0
//! for class in 0..=6:                      (0 = highest priority)
//!   walk class's queue front to back while admitted < capacity:
//!     ungrouped            → admit, admitted += 1
//!     grouped, fits        → pull every member out of its queue, admit all
//!     grouped, too large   → leave the whole group queued, keep walking
//!     stray / already in   → drop the reference, no count
//! ```
//!
//! A group is admitted whole or not at all.  The size check runs before any
//! state changes, so a deferred group is left exactly as it was.  A group
//! larger than the gate capacity is therefore deferred every round; this is
//! logged at `warn` level rather than papered over with a partial admission.
//!
//! # Concurrency
//!
//! Every mutating operation takes `&mut Gate`, so a boarding round can never
//! interleave with a check-in or another round.  To share one gate between
//! threads, wrap it in a `Mutex` and hold the lock for the whole call.
//!
//! # Quick-start
//!
//! ```rust
//! use bq_gate::Gate;
//!
//! let mut gate = Gate::new();
//! gate.check_in("Ana", 1, 0).unwrap();
//! gate.check_in("Ben", 2, 7).unwrap();
//! gate.check_in("Cy",  2, 7).unwrap();
//!
//! let report = gate.run_boarding_round();
//! assert_eq!(report.admitted, 3);
//! assert_eq!(gate.snapshot().total_waiting, 0);
//! ```

pub mod boarding;
pub mod error;
pub mod gate;
pub mod manifest;
pub mod observer;
pub mod report;


pub use error::{ManifestError, ManifestResult};
pub use gate::Gate;
pub use manifest::{load_manifest_csv, load_manifest_reader};
pub use observer::{GateObserver, NoopObserver};
pub use report::{BoardingEvent, BoardingReport, CheckInConfirmation, StatusReport};

pub use bq_core::{BoardingError, BoardingResult, GateCapacity, GateConfig, GroupId, PassengerId, PriorityClass};
