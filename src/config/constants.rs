use std::time::Duration;

// Top Level Constants
/// How long the mock scanner and generator pretend to work before answering.
pub const SIMULATED_WORK_DELAY: Duration = Duration::from_millis(2000);

pub mod calculator {
    /// Average number of weeks in a month.
    pub const WEEKS_PER_MONTH: f64 = 4.33;
    pub const MONTHS_PER_YEAR: f64 = 12.0;
}

pub mod scanner {
    /// Opportunities shown after each scan.
    pub const SAMPLE_SIZE: usize = 4;
}
