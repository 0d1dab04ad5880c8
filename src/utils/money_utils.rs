/// Replace NaN and infinities with zero.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Whole-dollar amount, e.g. `$5830`. Halves round away from zero.
///
/// Overflowed amounts show as `$Infinity` rather than a believable `$0`.
pub fn format_usd(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("${}Infinity", sign);
    }
    format!("${:.0}", finite_or_zero(value).round() + 0.0)
}

/// Whole-dollar amount with a period suffix, e.g. `$4330/month`.
pub fn format_usd_per(value: f64, period: &str) -> String {
    format!("{}/{}", format_usd(value), period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_collapse_to_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-2.5), -2.5);
    }

    #[test]
    fn usd_is_rounded_to_whole_dollars() {
        assert_eq!(format_usd(5830.2), "$5830");
        assert_eq!(format_usd(17.32), "$17");
        assert_eq!(format_usd(69959.7), "$69960");
        assert_eq!(format_usd_per(4330.0, "month"), "$4330/month");
    }

    #[test]
    fn usd_ties_round_away_from_zero() {
        assert_eq!(format_usd(2.5), "$3");
        assert_eq!(format_usd(0.5), "$1");
        assert_eq!(format_usd(12.5), "$13");
        assert_eq!(format_usd(-2.5), "$-3");
    }

    #[test]
    fn overflowed_amounts_are_labelled() {
        assert_eq!(format_usd(f64::INFINITY), "$Infinity");
        assert_eq!(format_usd(f64::NEG_INFINITY), "$-Infinity");
        assert_eq!(format_usd_per(f64::INFINITY, "hr"), "$Infinity/hr");
        assert_eq!(format_usd(f64::NAN), "$0");
    }
}
