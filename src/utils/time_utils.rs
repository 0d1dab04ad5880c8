use std::time::Duration;

/// Monotonic instant that works on native and in the browser.
pub type AppInstant = web_time::Instant;

/// How long until `deadline`, zero if it has already passed.
pub fn time_until(deadline: AppInstant, now: AppInstant) -> Duration {
    deadline.saturating_duration_since(now)
}

/// Short countdown text for loading labels, e.g. `1.4s`.
pub fn format_countdown(remaining: Duration) -> String {
    format!("{:.1}s", remaining.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_until_saturates_once_deadline_passed() {
        let now = AppInstant::now();
        let deadline = now + Duration::from_millis(250);
        assert_eq!(time_until(deadline, now), Duration::from_millis(250));
        assert_eq!(time_until(now, deadline), Duration::ZERO);
    }

    #[test]
    fn countdown_has_one_decimal() {
        assert_eq!(format_countdown(Duration::from_millis(1450)), "1.4s");
        assert_eq!(format_countdown(Duration::ZERO), "0.0s");
    }
}
