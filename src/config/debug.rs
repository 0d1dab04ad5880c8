//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Section changes, including the view being mounted or dropped.
    pub log_navigation: bool,

    /// Scan triggers, stale completions and the sampled titles.
    pub log_scanner: bool,

    /// Strategy requests (with the captured inputs) and picks.
    pub log_generator: bool,

    pub log_calculator: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_navigation: true,

    log_scanner: true,
    log_generator: true,
    log_calculator: false,

    log_performance: false,
};
