//! Badge lookup tables for catalog fields. Matching is case-insensitive and
//! anything unlisted gets the neutral tone.

/// Color family of a badge; the UI maps tones to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Green,
    Yellow,
    Red,
    Orange,
    Blue,
    Purple,
    Pink,
    Indigo,
    Teal,
}

/// Badge shape, independent of tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Filled,
    Secondary,
    Outline,
}

/// Accent of a home page feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Purple,
    Blue,
    Green,
    Indigo,
}

pub fn opportunity_difficulty_tone(difficulty: &str) -> BadgeTone {
    match difficulty.to_lowercase().as_str() {
        "easy" => BadgeTone::Green,
        "medium" => BadgeTone::Yellow,
        "hard" => BadgeTone::Red,
        _ => BadgeTone::Neutral,
    }
}

pub fn demand_tone(demand: &str) -> BadgeTone {
    match demand.to_lowercase().as_str() {
        "very high" => BadgeTone::Red,
        "high" => BadgeTone::Orange,
        "growing" => BadgeTone::Blue,
        _ => BadgeTone::Neutral,
    }
}

pub fn resource_difficulty_tone(difficulty: &str) -> BadgeTone {
    match difficulty.to_lowercase().as_str() {
        "beginner" => BadgeTone::Green,
        "intermediate" => BadgeTone::Yellow,
        "advanced" => BadgeTone::Red,
        _ => BadgeTone::Neutral,
    }
}

pub fn resource_kind_tone(kind: &str) -> BadgeTone {
    match kind.to_lowercase().as_str() {
        "guide" => BadgeTone::Blue,
        "video course" => BadgeTone::Purple,
        "template" => BadgeTone::Orange,
        "community" => BadgeTone::Pink,
        "ebook" => BadgeTone::Indigo,
        "case study" => BadgeTone::Teal,
        _ => BadgeTone::Neutral,
    }
}

/// Only "Low-Medium" strategies get the softer badge.
pub fn strategy_difficulty_variant(difficulty: &str) -> BadgeVariant {
    if difficulty == "Low-Medium" {
        BadgeVariant::Secondary
    } else {
        BadgeVariant::Filled
    }
}

pub fn feature_accent(color: &str) -> Accent {
    match color {
        "blue" => Accent::Blue,
        "green" => Accent::Green,
        "indigo" => Accent::Indigo,
        _ => Accent::Purple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FEATURES, OPPORTUNITIES, RESOURCES, STRATEGIES};

    #[test]
    fn lookups_ignore_case() {
        assert_eq!(opportunity_difficulty_tone("EASY"), BadgeTone::Green);
        assert_eq!(demand_tone("Very High"), BadgeTone::Red);
        assert_eq!(resource_kind_tone("VIDEO COURSE"), BadgeTone::Purple);
        assert_eq!(resource_difficulty_tone("Advanced"), BadgeTone::Red);
    }

    #[test]
    fn unmatched_keys_fall_back_to_neutral() {
        assert_eq!(opportunity_difficulty_tone("Easy-Medium"), BadgeTone::Neutral);
        assert_eq!(demand_tone("Low"), BadgeTone::Neutral);
        assert_eq!(resource_difficulty_tone("All Levels"), BadgeTone::Neutral);
        assert_eq!(resource_kind_tone("Podcast"), BadgeTone::Neutral);
        assert_eq!(feature_accent("magenta"), Accent::Purple);
    }

    #[test]
    fn every_resource_kind_is_styled() {
        for resource in &RESOURCES {
            assert_ne!(resource_kind_tone(resource.kind), BadgeTone::Neutral, "{}", resource.title);
        }
    }

    #[test]
    fn catalog_values_map_as_shipped() {
        let growing = OPPORTUNITIES.iter().find(|o| o.demand == "Growing").map(|o| demand_tone(o.demand));
        assert_eq!(growing, Some(BadgeTone::Blue));

        let variants: Vec<_> = STRATEGIES.iter().map(|s| strategy_difficulty_variant(s.difficulty)).collect();
        assert_eq!(
            variants,
            [BadgeVariant::Filled, BadgeVariant::Filled, BadgeVariant::Secondary]
        );

        let accents: Vec<_> = FEATURES.iter().map(|f| feature_accent(f.color)).collect();
        assert_eq!(accents, [Accent::Purple, Accent::Blue, Accent::Green, Accent::Indigo]);
    }
}
