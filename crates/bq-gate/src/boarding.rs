//! The boarding round: strict priority, group-atomic, capacity-bounded.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use bq_core::{GateCapacity, GroupId, PassengerId, PriorityClass};

use crate::{BoardingEvent, BoardingReport, Gate, GateObserver, NoopObserver};

impl Gate {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run one round at the configured capacity.
    pub fn run_boarding_round(&mut self) -> BoardingReport {
        self.run_boarding_round_with(self.capacity, &mut NoopObserver)
    }

    /// Run one round at the configured capacity, reporting to `observer`.
    pub fn run_boarding_round_observed<O: GateObserver>(&mut self, observer: &mut O) -> BoardingReport {
        self.run_boarding_round_with(self.capacity, observer)
    }

    /// Run one round admitting at most `capacity` passengers.
    ///
    /// Classes are scanned from highest priority to lowest and each queue is
    /// walked front to back.  A grouped passenger triggers a lookahead over
    /// the whole group: if its unboarded members fit the remaining budget
    /// they are all pulled from their queues and admitted together, otherwise
    /// the group is left queued untouched and the walk moves on to the
    /// passenger behind.  The round ends when the budget is spent or every
    /// queue has been walked.
    pub fn run_boarding_round_with<O: GateObserver>(
        &mut self,
        capacity: GateCapacity,
        observer: &mut O,
    ) -> BoardingReport {
        let budget = capacity.get();
        let mut report = BoardingReport::default();
        // Budget only shrinks within a round, so a group that did not fit
        // once cannot fit later in the same round.
        let mut deferred: FxHashSet<GroupId> = FxHashSet::default();

        observer.on_round_start(capacity);

        'classes: for class in PriorityClass::ALL {
            let mut cursor: Option<PassengerId> = None;
            loop {
                if report.admitted >= budget {
                    break 'classes;
                }
                let Some(id) = self.queues.next_after(class, cursor) else {
                    break;
                };
                cursor = Some(id);

                if self.boarded.contains(id) {
                    self.drop_stray(class, id, "already boarded");
                    continue;
                }
                let Some(group) = self.registry.get(id).map(|p| p.group) else {
                    self.drop_stray(class, id, "not in registry");
                    continue;
                };

                match group {
                    None => {
                        self.queues.remove_member(class, id);
                        self.admit(id, None, &mut report, observer);
                    }
                    Some(g) if deferred.contains(&g) => {}
                    Some(g) => {
                        let Some(unboarded) = self.unboarded_count(g) else {
                            self.drop_stray(class, id, "group already resolved");
                            continue;
                        };
                        let remaining = budget - report.admitted;
                        if unboarded > remaining {
                            if unboarded > budget {
                                warn!(
                                    group = g.0, size = unboarded, capacity = budget,
                                    "group is larger than gate capacity and cannot board"
                                );
                            } else {
                                debug!(group = g.0, size = unboarded, remaining, "group deferred");
                            }
                            deferred.insert(g);
                            report.deferred.push(g);
                            observer.on_group_deferred(g, unboarded, remaining);
                            continue;
                        }
                        self.board_group(g, &mut report, observer);
                    }
                }
            }
        }

        info!(
            admitted = report.admitted,
            capacity = budget,
            deferred = report.deferred.len(),
            waiting = self.queues.total(),
            "boarding round complete"
        );
        observer.on_round_end(&report);
        report
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Members of `group` not yet boarded, or `None` if the group is gone.
    fn unboarded_count(&self, group: GroupId) -> Option<usize> {
        self.groups.find(group).map(|g| {
            g.members().iter().filter(|&&m| !self.boarded.contains(m)).count()
        })
    }

    /// Pull every member of `group` out of its queue, then admit the ones not
    /// yet boarded and drop the group from the index.
    ///
    /// The caller has already checked that the group fits.
    fn board_group<O: GateObserver>(
        &mut self,
        group:    GroupId,
        report:   &mut BoardingReport,
        observer: &mut O,
    ) {
        let Some(resolved) = self.groups.remove(group) else {
            return;
        };
        for &member in resolved.members() {
            if let Some(p) = self.registry.get(member) {
                self.queues.remove_member(p.class, member);
            }
        }
        for &member in resolved.members() {
            if !self.boarded.contains(member) {
                self.admit(member, Some(group), report, observer);
            }
        }
    }

    /// Mark `id` boarded and record the event.  `id` must already be out of
    /// its queue.
    fn admit<O: GateObserver>(
        &mut self,
        id:       PassengerId,
        group:    Option<GroupId>,
        report:   &mut BoardingReport,
        observer: &mut O,
    ) {
        let Some(p) = self.registry.get(id) else {
            return;
        };
        let event = BoardingEvent {
            passenger: id,
            name:      p.name.clone(),
            class:     p.class,
            group,
        };
        if !self.boarded.insert(id) {
            return;
        }
        debug!(passenger = %id, name = %event.name, class = %event.class, "admitted");
        observer.on_admitted(&event);
        report.events.push(event);
        report.admitted += 1;
    }

    /// Remove a queue entry that no longer refers to a boardable passenger.
    /// Not counted against the round's budget.
    fn drop_stray(&mut self, class: PriorityClass, id: PassengerId, reason: &'static str) {
        warn!(passenger = %id, %class, reason, "dropping stray queue reference");
        self.queues.remove_member(class, id);
    }
}
