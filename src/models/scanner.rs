//! Mock opportunity scanner: a delayed shuffle-and-truncate over the catalog.

use std::time::Duration;

use crate::config::constants::scanner::SAMPLE_SIZE;
use crate::config::{DF, SIMULATED_WORK_DELAY};
use crate::data::OPPORTUNITIES;
use crate::domain::Opportunity;
use crate::engine::{DelayedSlot, RandomSource, Ticket, shuffle};
use crate::utils::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
}

/// `count` distinct records from `catalog`, order decorrelated from the catalog's.
pub fn sample_catalog<'a, T>(
    catalog: &'a [T],
    count: usize,
    rng: &mut dyn RandomSource,
) -> Vec<&'a T> {
    let mut picks: Vec<&T> = catalog.iter().collect();
    shuffle(&mut picks, rng);
    picks.truncate(count);
    picks
}

#[derive(Debug)]
pub struct OpportunityScanner {
    catalog: &'static [Opportunity],
    sample_size: usize,
    delay: Duration,
    results: Vec<&'static Opportunity>,
    slot: DelayedSlot<()>,
}

impl Default for OpportunityScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl OpportunityScanner {
    pub fn new() -> Self {
        Self::with_catalog(&OPPORTUNITIES, SAMPLE_SIZE, SIMULATED_WORK_DELAY)
    }

    pub fn with_catalog(
        catalog: &'static [Opportunity],
        sample_size: usize,
        delay: Duration,
    ) -> Self {
        Self {
            catalog,
            sample_size,
            delay,
            results: Vec::new(),
            slot: DelayedSlot::new(),
        }
    }

    /// Start a scan. A scan already in flight is superseded.
    pub fn trigger(&mut self, now: AppInstant) -> Ticket {
        let ticket = self.slot.schedule(now, self.delay, ());
        if DF.log_scanner {
            log::info!("Scan #{} started", ticket.seq());
        }
        ticket
    }

    /// Apply the newest scan if its delay has elapsed. True when results changed.
    pub fn poll(&mut self, now: AppInstant, rng: &mut dyn RandomSource) -> bool {
        let Some(done) = self.slot.poll(now) else {
            return false;
        };
        self.results = sample_catalog(self.catalog, self.sample_size, rng);
        if DF.log_scanner {
            let titles: Vec<&str> = self.results.iter().map(|o| o.title).collect();
            log::info!("Scan #{} finished: {:?}", done.ticket.seq(), titles);
        }
        true
    }

    pub fn phase(&self) -> ScanPhase {
        if self.slot.is_pending() {
            ScanPhase::Scanning
        } else {
            ScanPhase::Idle
        }
    }

    /// Results of the last completed scan; kept while a rescan is pending.
    pub fn results(&self) -> &[&'static Opportunity] {
        &self.results
    }

    pub fn next_deadline(&self) -> Option<AppInstant> {
        self.slot.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::engine::{ScriptedRandom, SeededRandom};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_until_triggered() {
        let mut scanner = OpportunityScanner::new();
        let mut rng = ScriptedRandom::new(&[0]);
        assert_eq!(scanner.phase(), ScanPhase::Idle);
        assert!(!scanner.poll(AppInstant::now(), &mut rng));
        assert!(scanner.results().is_empty());
    }

    #[test]
    fn scan_completes_after_two_seconds() {
        let t0 = AppInstant::now();
        let mut scanner = OpportunityScanner::new();
        let mut rng = SeededRandom::from_seed(3);

        scanner.trigger(t0);
        assert_eq!(scanner.phase(), ScanPhase::Scanning);
        assert_eq!(scanner.next_deadline(), Some(t0 + ms(2000)));
        assert!(!scanner.poll(t0 + ms(1999), &mut rng));
        assert!(scanner.results().is_empty());

        assert!(scanner.poll(t0 + ms(2000), &mut rng));
        assert_eq!(scanner.phase(), ScanPhase::Idle);
        assert_eq!(scanner.results().len(), 4);
    }

    #[test]
    fn results_are_four_distinct_catalog_records() {
        let mut rng = SeededRandom::from_seed(11);
        for round in 0..200 {
            let picks = sample_catalog(&OPPORTUNITIES, SAMPLE_SIZE, &mut rng);
            assert_eq!(picks.len(), 4, "round {round}");
            let titles: HashSet<_> = picks.iter().map(|o| o.title).collect();
            assert_eq!(titles.len(), 4, "duplicates in round {round}");
            assert!(picks.iter().all(|p| OPPORTUNITIES.contains(*p)));
        }
    }

    #[test]
    fn scripted_source_gives_exact_sample() {
        // Shuffle of 6 with every pick 0 rotates the first element to the back.
        let mut rng = ScriptedRandom::new(&[0]);
        let picks = sample_catalog(&OPPORTUNITIES, 4, &mut rng);
        let titles: Vec<_> = picks.iter().map(|o| o.title).collect();
        assert_eq!(
            titles,
            [
                OPPORTUNITIES[1].title,
                OPPORTUNITIES[2].title,
                OPPORTUNITIES[3].title,
                OPPORTUNITIES[4].title,
            ]
        );
    }

    #[test]
    fn retrigger_keeps_old_results_and_applies_latest_only() {
        let t0 = AppInstant::now();
        let mut scanner = OpportunityScanner::new();
        let mut rng = ScriptedRandom::new(&[0]);

        scanner.trigger(t0);
        assert!(scanner.poll(t0 + ms(2000), &mut rng));
        let first: Vec<_> = scanner.results().to_vec();

        scanner.trigger(t0 + ms(3000));
        scanner.trigger(t0 + ms(3500));
        assert_eq!(scanner.phase(), ScanPhase::Scanning);

        // The superseded scan comes due: nothing changes, still scanning.
        assert!(!scanner.poll(t0 + ms(5200), &mut rng));
        assert_eq!(scanner.results(), first.as_slice());
        assert_eq!(scanner.phase(), ScanPhase::Scanning);

        assert!(scanner.poll(t0 + ms(5500), &mut rng));
        assert_eq!(scanner.phase(), ScanPhase::Idle);
        assert_eq!(scanner.results().len(), 4);
    }

    #[test]
    fn every_record_eventually_surfaces() {
        let mut rng = SeededRandom::from_seed(99);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            for pick in sample_catalog(&OPPORTUNITIES, SAMPLE_SIZE, &mut rng) {
                seen.insert(pick.title);
            }
        }
        assert_eq!(seen.len(), OPPORTUNITIES.len());
    }
}
