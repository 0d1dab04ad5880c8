use crate::domain::{ServiceKind, ServiceType};

pub const SERVICE_TYPES: [ServiceType; 7] = [
    ServiceType {
        kind: ServiceKind::ContentWriting,
        label: "AI Content Writing",
        avg_rate: 25.0,
    },
    ServiceType {
        kind: ServiceKind::SocialMedia,
        label: "AI Social Media Management",
        avg_rate: 30.0,
    },
    ServiceType {
        kind: ServiceKind::Chatbot,
        label: "AI Chatbot Development",
        avg_rate: 50.0,
    },
    ServiceType {
        kind: ServiceKind::DataAnalysis,
        label: "AI Data Analysis",
        avg_rate: 60.0,
    },
    ServiceType {
        kind: ServiceKind::ImageGeneration,
        label: "AI Image Generation",
        avg_rate: 35.0,
    },
    ServiceType {
        kind: ServiceKind::Tutoring,
        label: "AI-Enhanced Tutoring",
        avg_rate: 40.0,
    },
    ServiceType {
        kind: ServiceKind::Consulting,
        label: "AI Consulting",
        avg_rate: 75.0,
    },
];

/// Catalog entry for `kind`.
pub fn service_type(kind: ServiceKind) -> Option<&'static ServiceType> {
    SERVICE_TYPES.iter().find(|s| s.kind == kind)
}
