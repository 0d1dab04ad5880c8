//! Mock strategy generator: a delayed uniform pick from the strategy catalog.
//!
//! The request fields are captured and logged but never steer the pick.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, IntoStaticStr};

use crate::config::{DF, SIMULATED_WORK_DELAY};
use crate::data::STRATEGIES;
use crate::domain::Strategy;
use crate::engine::{DelayedSlot, RandomSource, Ticket, choose};
use crate::utils::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TimeCommitment {
    PartTime,
    FullTime,
    Weekend,
}

impl TimeCommitment {
    pub fn label(self) -> &'static str {
        match self {
            Self::PartTime => "Part-time (5-15 hrs/week)",
            Self::FullTime => "Full-time (40+ hrs/week)",
            Self::Weekend => "Weekends only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, IntoStaticStr)]
pub enum BudgetRange {
    #[strum(serialize = "0-100")]
    #[serde(rename = "0-100")]
    UpTo100,
    #[strum(serialize = "100-500")]
    #[serde(rename = "100-500")]
    From100To500,
    #[strum(serialize = "500-1000")]
    #[serde(rename = "500-1000")]
    From500To1000,
    #[strum(serialize = "1000+")]
    #[serde(rename = "1000+")]
    Over1000,
}

impl BudgetRange {
    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo100 => "$0 - $100",
            Self::From100To500 => "$100 - $500",
            Self::From500To1000 => "$500 - $1,000",
            Self::Over1000 => "$1,000+",
        }
    }
}

/// What the user typed and picked before pressing generate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub skills: String,
    pub time_available: Option<TimeCommitment>,
    pub budget: Option<BudgetRange>,
}

pub fn pick_strategy<'a>(catalog: &'a [Strategy], rng: &mut dyn RandomSource) -> Option<&'a Strategy> {
    choose(catalog, rng)
}

#[derive(Debug)]
pub struct StrategyGenerator {
    catalog: &'static [Strategy],
    delay: Duration,
    current: Option<&'static Strategy>,
    slot: DelayedSlot<StrategyRequest>,
}

impl Default for StrategyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyGenerator {
    pub fn new() -> Self {
        Self::with_catalog(&STRATEGIES, SIMULATED_WORK_DELAY)
    }

    pub fn with_catalog(catalog: &'static [Strategy], delay: Duration) -> Self {
        Self {
            catalog,
            delay,
            current: None,
            slot: DelayedSlot::new(),
        }
    }

    /// Queue a generation. A request already in flight is superseded.
    pub fn trigger(&mut self, request: StrategyRequest, now: AppInstant) -> Ticket {
        if DF.log_generator {
            log::info!(
                "Strategy requested: skills={:?} time={:?} budget={:?}",
                request.skills,
                request.time_available,
                request.budget
            );
        }
        self.slot.schedule(now, self.delay, request)
    }

    /// Apply the newest request if due. True when a strategy was picked.
    pub fn poll(&mut self, now: AppInstant, rng: &mut dyn RandomSource) -> bool {
        let Some(done) = self.slot.poll(now) else {
            return false;
        };
        self.current = pick_strategy(self.catalog, rng);
        if DF.log_generator {
            log::info!(
                "Strategy #{} ready: {:?} (inputs ignored: {:?})",
                done.ticket.seq(),
                self.current.map(|s| s.title),
                done.payload
            );
        }
        true
    }

    pub fn is_generating(&self) -> bool {
        self.slot.is_pending()
    }

    pub fn current(&self) -> Option<&'static Strategy> {
        self.current
    }

    pub fn next_deadline(&self) -> Option<AppInstant> {
        self.slot.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::engine::{ScriptedRandom, SeededRandom};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn picks_one_catalog_record_after_delay() {
        let t0 = AppInstant::now();
        let mut generator = StrategyGenerator::new();
        let mut rng = ScriptedRandom::new(&[1]);

        generator.trigger(StrategyRequest::default(), t0);
        assert!(generator.is_generating());
        assert!(!generator.poll(t0 + ms(1500), &mut rng));
        assert_eq!(generator.current(), None);

        assert!(generator.poll(t0 + ms(2000), &mut rng));
        assert!(!generator.is_generating());
        assert_eq!(generator.current(), Some(&STRATEGIES[1]));
    }

    #[test]
    fn inputs_do_not_change_the_pick() {
        let t0 = AppInstant::now();
        let requests = [
            StrategyRequest::default(),
            StrategyRequest {
                skills: "coding, design".to_string(),
                time_available: Some(TimeCommitment::Weekend),
                budget: Some(BudgetRange::Over1000),
            },
        ];
        let mut picks = Vec::new();
        for request in requests {
            let mut generator = StrategyGenerator::new();
            let mut rng = SeededRandom::from_seed(5);
            generator.trigger(request, t0);
            generator.poll(t0 + ms(2000), &mut rng);
            picks.push(generator.current().map(|s| s.title));
        }
        assert_eq!(picks[0], picks[1]);
    }

    #[test]
    fn latest_request_wins() {
        let t0 = AppInstant::now();
        let mut generator = StrategyGenerator::new();
        let mut rng = ScriptedRandom::new(&[2]);

        generator.trigger(StrategyRequest::default(), t0);
        generator.trigger(StrategyRequest::default(), t0 + ms(100));

        assert!(!generator.poll(t0 + ms(2050), &mut rng));
        assert!(generator.is_generating());
        assert!(generator.poll(t0 + ms(2100), &mut rng));
        assert_eq!(generator.current(), Some(&STRATEGIES[2]));
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let mut rng = SeededRandom::from_seed(2024);
        let trials = 3000;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..trials {
            let pick = pick_strategy(&STRATEGIES, &mut rng).expect("non-empty catalog");
            *counts.entry(pick.title).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        for (title, count) in counts {
            // Expected 1000 each; 800..1200 is far beyond 5 sigma.
            assert!((800..=1200).contains(&count), "{title}: {count}");
        }
    }

    #[test]
    fn option_labels_and_ids() {
        let id: &str = BudgetRange::From500To1000.into();
        assert_eq!(id, "500-1000");
        assert_eq!(BudgetRange::Over1000.label(), "$1,000+");
        let id: &str = TimeCommitment::PartTime.into();
        assert_eq!(id, "part-time");
        assert_eq!(TimeCommitment::Weekend.label(), "Weekends only");
    }
}
