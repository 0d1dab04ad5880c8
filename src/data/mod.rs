//! Fixed in-memory catalogs. Nothing here is fetched or mutated.

mod home;
mod opportunities;
mod resources;
mod services;
mod strategies;

pub use {
    home::{FEATURES, STATS, TESTIMONIALS},
    opportunities::OPPORTUNITIES,
    resources::RESOURCES,
    services::{SERVICE_TYPES, service_type},
    strategies::STRATEGIES,
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::domain::{Section, ServiceKind};

    #[test]
    fn every_service_kind_has_exactly_one_entry() {
        for kind in ServiceKind::iter() {
            let matches = SERVICE_TYPES.iter().filter(|s| s.kind == kind).count();
            assert_eq!(matches, 1, "{kind}");
        }
        assert_eq!(service_type(ServiceKind::Consulting).map(|s| s.avg_rate), Some(75.0));
        assert_eq!(
            service_type(ServiceKind::ContentWriting).map(|s| s.label),
            Some("AI Content Writing")
        );
    }

    #[test]
    fn catalog_titles_are_unique() {
        let titles: HashSet<_> = OPPORTUNITIES.iter().map(|o| o.title).collect();
        assert_eq!(titles.len(), OPPORTUNITIES.len());
        let titles: HashSet<_> = STRATEGIES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), STRATEGIES.len());
        let titles: HashSet<_> = RESOURCES.iter().map(|r| r.title).collect();
        assert_eq!(titles.len(), RESOURCES.len());
    }

    #[test]
    fn strategies_carry_ordered_steps_and_tags() {
        for strategy in &STRATEGIES {
            assert_eq!(strategy.steps.len(), 5, "{}", strategy.title);
            assert!(!strategy.tags.is_empty());
        }
        assert_eq!(STRATEGIES[0].steps[0], "Learn AI content tools (ChatGPT, Claude, Jasper)");
    }

    #[test]
    fn home_features_link_every_tool_section() {
        let targets: HashSet<_> = FEATURES.iter().map(|f| f.target).collect();
        assert_eq!(targets.len(), 4);
        assert!(!targets.contains(&Section::Home));
        assert_eq!(STATS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
    }
}
