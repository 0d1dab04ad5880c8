use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// One of the mutually exclusive top-level views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Generator,
    Scanner,
    Calculator,
    Resources,
}

impl Section {
    /// Total lookup: anything unrecognised is `Home`.
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    #[inline]
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Label shown on the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Generator => "AI Strategy",
            Self::Scanner => "Opportunities",
            Self::Calculator => "Calculator",
            Self::Resources => "Resources",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn known_ids_round_trip() {
        for section in Section::iter() {
            assert_eq!(Section::from_id(section.id()), section);
        }
        assert_eq!(Section::iter().count(), 5);
    }

    #[test]
    fn unknown_ids_fall_back_to_home() {
        assert_eq!(Section::from_id(""), Section::Home);
        assert_eq!(Section::from_id("pricing"), Section::Home);
        assert_eq!(Section::from_id("Scanner"), Section::Home);
    }

    #[test]
    fn ids_match_navigation_contract() {
        let ids: Vec<&str> = Section::iter().map(Section::id).collect();
        assert_eq!(ids, ["home", "generator", "scanner", "calculator", "resources"]);
        assert_eq!(Section::Scanner.to_string(), "scanner");
        assert_eq!(Section::Generator.label(), "AI Strategy");
    }
}
