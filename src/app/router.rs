use serde::{Deserialize, Serialize};

use crate::config::DF;
use crate::domain::Section;

/// Holds the one active section. All selection goes through here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionRouter {
    active: Section,
}

impl SectionRouter {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Make `section` active. Returns false when it already was.
    pub fn select(&mut self, section: Section) -> bool {
        if self.active == section {
            return false;
        }
        if DF.log_navigation {
            log::info!("Navigate: {} -> {}", self.active, section);
        }
        self.active = section;
        true
    }

    /// Select by identifier; unknown identifiers select `Home`.
    pub fn select_id(&mut self, id: &str) -> bool {
        self.select(Section::from_id(id))
    }
}
