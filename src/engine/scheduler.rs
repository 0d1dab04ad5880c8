//! Delayed completions with last-trigger-wins ordering.
//!
//! Every scheduled job gets a monotonic [`Ticket`]. Only the job holding the
//! most recent ticket may complete; older jobs are discarded when they come
//! due (or dropped outright once the newest one fires).

use std::time::Duration;

use crate::utils::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[inline]
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct PendingJob<T> {
    ticket: Ticket,
    due: AppInstant,
    payload: T,
}

/// A job whose delay elapsed while it was still the newest.
#[derive(Debug, PartialEq)]
pub struct Completed<T> {
    pub ticket: Ticket,
    pub payload: T,
}

#[derive(Debug)]
pub struct DelayedSlot<T> {
    last_issued: u64,
    pending: Vec<PendingJob<T>>,
}

impl<T> Default for DelayedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DelayedSlot<T> {
    pub fn new() -> Self {
        Self {
            last_issued: 0,
            pending: Vec::new(),
        }
    }

    /// Queue `payload` to complete `delay` after `now`. Supersedes earlier jobs.
    pub fn schedule(&mut self, now: AppInstant, delay: Duration, payload: T) -> Ticket {
        self.last_issued += 1;
        let ticket = Ticket(self.last_issued);
        self.pending.push(PendingJob {
            ticket,
            due: now + delay,
            payload,
        });
        ticket
    }

    fn current(&self) -> Option<&PendingJob<T>> {
        self.pending
            .iter()
            .find(|job| job.ticket.0 == self.last_issued)
    }

    /// True while the newest job has not completed.
    pub fn is_pending(&self) -> bool {
        self.current().is_some()
    }

    /// Deadline of the newest job, if one is pending.
    pub fn next_deadline(&self) -> Option<AppInstant> {
        self.current().map(|job| job.due)
    }

    /// Jobs still held, including superseded ones that have not come due.
    #[cfg(test)]
    pub(crate) fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Drop everything; no pending job can complete afterwards.
    #[cfg(test)]
    pub(crate) fn cancel(&mut self) {
        self.pending.clear();
    }

    /// Retire every job due at `now`. Returns the newest job if it was among them.
    pub fn poll(&mut self, now: AppInstant) -> Option<Completed<T>> {
        let mut fired = None;
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due > now {
                i += 1;
                continue;
            }
            let job = self.pending.swap_remove(i);
            if job.ticket.0 == self.last_issued {
                fired = Some(Completed {
                    ticket: job.ticket,
                    payload: job.payload,
                });
            } else {
                log::debug!(
                    "Discarding stale completion #{} (latest #{})",
                    job.ticket.0,
                    self.last_issued
                );
            }
        }

        if fired.is_some() {
            // Older jobs can never apply once the newest has landed.
            self.pending.clear();
        }
        fired
    }
}
