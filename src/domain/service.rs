use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifier of an AI service offered in the income calculator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    ContentWriting,
    SocialMedia,
    Chatbot,
    DataAnalysis,
    ImageGeneration,
    Tutoring,
    Consulting,
}

impl ServiceKind {
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    #[inline]
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// Catalog entry: a service with its average market rate in $/hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceType {
    pub kind: ServiceKind,
    pub label: &'static str,
    pub avg_rate: f64,
}
