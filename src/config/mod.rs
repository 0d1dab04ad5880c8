//! Configuration module for the money machine application.

mod debug;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::SIMULATED_WORK_DELAY;
pub use debug::{DF, LogFlags};
pub use persistence::PERSISTENCE;
