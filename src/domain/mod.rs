// Domain types and value objects
mod records;
mod section;
mod service;

pub use records::{Feature, Opportunity, Resource, ResourceIcon, Stat, Strategy, Testimonial};
pub use section::Section;
pub use service::{ServiceKind, ServiceType};
