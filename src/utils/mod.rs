mod money_utils;
mod perf;
mod time_utils;

pub use money_utils::{finite_or_zero, format_usd, format_usd_per};
pub use time_utils::{AppInstant, format_countdown, time_until};
