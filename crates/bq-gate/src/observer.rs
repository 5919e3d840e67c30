//! Boarding-round observer trait for progress reporting and data collection.

use bq_core::{GateCapacity, GroupId};

use crate::{BoardingEvent, BoardingReport};

/// Callbacks invoked by [`Gate::run_boarding_round_with`][crate::Gate::run_boarding_round_with]
/// while a round is in progress.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The gate is exclusively borrowed for the
/// whole round, so observers see a consistent sequence and cannot re-enter it.
///
/// # Example — live announcer
///
/// ```rust
/// use bq_gate::{BoardingEvent, Gate, GateObserver};
///
/// struct Announcer(Vec<String>);
///
/// impl GateObserver for Announcer {
///     fn on_admitted(&mut self, event: &BoardingEvent) {
///         self.0.push(format!("now boarding: {}", event.name));
///     }
/// }
///
/// let mut gate = Gate::new();
/// gate.check_in("Ana", 0, 0).unwrap();
/// let mut announcer = Announcer(Vec::new());
/// gate.run_boarding_round_observed(&mut announcer);
/// assert_eq!(announcer.0, vec!["now boarding: Ana"]);
/// ```
pub trait GateObserver {
    /// Called before the first queue is inspected.
    fn on_round_start(&mut self, _capacity: GateCapacity) {}

    /// Called once per admitted passenger, in boarding order.
    fn on_admitted(&mut self, _event: &BoardingEvent) {}

    /// Called the first time in a round a group is found not to fit.
    ///
    /// `unboarded` is the group's size; `remaining` is the budget left at
    /// that point.
    fn on_group_deferred(&mut self, _group: GroupId, _unboarded: usize, _remaining: usize) {}

    /// Called once after the round completes.
    fn on_round_end(&mut self, _report: &BoardingReport) {}
}

/// A [`GateObserver`] that does nothing.
pub struct NoopObserver;

impl GateObserver for NoopObserver {}
