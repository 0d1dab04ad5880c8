#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for income_calc.rs)
pub use app::App;
pub use config::PERSISTENCE;
pub use data::{SERVICE_TYPES, service_type};
pub use domain::{Section, ServiceKind, ServiceType};
pub use models::{CalculationResult, IncomeInputs, calculate, parse_amount};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Section to open on start: home, generator, scanner, calculator or resources
    #[arg(long)]
    pub section: Option<String>,

    /// Seed the random source so scans and strategies repeat between runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ignore the saved UI state
    #[arg(long, default_value_t = false)]
    pub fresh: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
