//! Static descriptive records shipped with the application.

use crate::domain::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opportunity {
    pub title: &'static str,
    pub category: &'static str,
    pub trend: &'static str,
    /// Free text, e.g. "$500-3000/month".
    pub potential: &'static str,
    pub difficulty: &'static str,
    pub description: &'static str,
    pub demand: &'static str,
    pub competition: &'static str,
    pub time_to_start: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub title: &'static str,
    pub description: &'static str,
    pub potential: &'static str,
    pub timeframe: &'static str,
    pub difficulty: &'static str,
    /// Ordered action steps.
    pub steps: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceIcon {
    FileText,
    Video,
    Users,
    Zap,
    BookOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    /// Guide, Video Course, Template...
    pub kind: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub icon: ResourceIcon,
    pub difficulty: &'static str,
    pub estimated_time: &'static str,
    pub tags: &'static [&'static str],
}

/// Home page feature card linking to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target: Section,
    /// Accent color key: purple, blue, green or indigo.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub income: &'static str,
    pub quote: &'static str,
}
