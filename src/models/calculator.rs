//! Income projection: five raw inputs in, one snapshot out.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

use crate::config::DF;
use crate::config::constants::calculator::{MONTHS_PER_YEAR, WEEKS_PER_MONTH};
use crate::data::service_type;
use crate::domain::ServiceKind;
use crate::utils::finite_or_zero;

/// Shown when no service was picked.
pub const FALLBACK_SERVICE_NAME: &str = "Selected Service";

/// Form state exactly as typed. Numbers stay text until [`calculate`] runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeInputs {
    pub service: Option<ServiceKind>,
    pub hourly_rate: String,
    pub hours_per_week: String,
    pub clients_per_month: String,
    pub project_value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RateComparison {
    Above,
    Below,
    At,
}

impl RateComparison {
    pub fn compare(rate: f64, market_rate: f64) -> Self {
        if rate > market_rate {
            Self::Above
        } else if rate < market_rate {
            Self::Below
        } else {
            Self::At
        }
    }
}

/// Snapshot produced by one "calculate" action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
    pub hourly_from_projects: f64,
    pub market_rate: f64,
    pub rate_comparison: RateComparison,
    pub service: Option<ServiceKind>,
    /// Hourly work share of `monthly`.
    pub monthly_hourly_income: f64,
    /// Project share of `monthly`.
    pub monthly_project_income: f64,
}

impl CalculationResult {
    pub fn service_name(&self) -> &'static str {
        self.service
            .and_then(service_type)
            .map_or(FALLBACK_SERVICE_NAME, |s| s.label)
    }
}

/// Lenient number parse: the longest leading decimal literal, or 0.
///
/// `"12abc"` is 12, `"abc"` and `""` are 0, overflow to infinity is 0.
pub fn parse_amount(text: &str) -> f64 {
    let s = text.trim();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().map_or(0.0, finite_or_zero)
}

pub fn calculate(inputs: &IncomeInputs) -> CalculationResult {
    let rate = parse_amount(&inputs.hourly_rate);
    let hours = parse_amount(&inputs.hours_per_week);
    let clients = parse_amount(&inputs.clients_per_month);
    let project_value = parse_amount(&inputs.project_value);

    let weekly = rate * hours;
    let monthly_hourly_income = weekly * WEEKS_PER_MONTH;
    let monthly_project_income = clients * project_value;
    let monthly = monthly_hourly_income + monthly_project_income;
    let yearly = monthly * MONTHS_PER_YEAR;

    let hourly_from_projects = if hours == 0.0 {
        0.0
    } else {
        finite_or_zero(monthly_project_income / (hours * WEEKS_PER_MONTH))
    };

    let market_rate = inputs
        .service
        .and_then(service_type)
        .map_or(0.0, |s| s.avg_rate);

    let result = CalculationResult {
        weekly,
        monthly,
        yearly,
        hourly_from_projects,
        market_rate,
        rate_comparison: RateComparison::compare(rate, market_rate),
        service: inputs.service,
        monthly_hourly_income,
        monthly_project_income,
    };

    if DF.log_calculator {
        log::info!("Calculated income snapshot: {:?}", result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(rate: &str, hours: &str, clients: &str, project: &str) -> IncomeInputs {
        IncomeInputs {
            service: None,
            hourly_rate: rate.to_string(),
            hours_per_week: hours.to_string(),
            clients_per_month: clients.to_string(),
            project_value: project.to_string(),
        }
    }

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn worked_example() {
        let r = calculate(&inputs("50", "20", "3", "500"));
        assert!(approx(r.weekly, 1000.0, 1e-9));
        assert!(approx(r.monthly, 5830.0, 1e-6));
        assert!(approx(r.yearly, 69960.0, 1e-6));
        assert!(approx(r.hourly_from_projects, 17.32, 0.005));
        assert!(approx(r.monthly_hourly_income, 4330.0, 1e-6));
        assert!(approx(r.monthly_project_income, 1500.0, 1e-9));
    }

    #[test]
    fn all_zero_inputs_without_service() {
        let r = calculate(&inputs("0", "0", "0", "0"));
        assert_eq!(r.weekly, 0.0);
        assert_eq!(r.monthly, 0.0);
        assert_eq!(r.yearly, 0.0);
        assert_eq!(r.hourly_from_projects, 0.0);
        assert_eq!(r.market_rate, 0.0);
        assert_eq!(r.rate_comparison, RateComparison::At);
        assert_eq!(r.service, None);
        assert_eq!(r.service_name(), FALLBACK_SERVICE_NAME);
    }

    #[test]
    fn zero_hours_never_divides() {
        for (clients, project) in [("3", "500"), ("0", "0"), ("10", "99999")] {
            let r = calculate(&inputs("80", "0", clients, project));
            assert_eq!(r.hourly_from_projects, 0.0);
            assert!(r.monthly.is_finite());
        }
    }

    #[test]
    fn formulas_hold_over_a_grid() {
        for rate in [0.0, 12.5, 75.0] {
            for hours in [0.0, 1.0, 40.0] {
                for clients in [0.0, 2.0] {
                    for project in [0.0, 750.0] {
                        let r = calculate(&inputs(
                            &rate.to_string(),
                            &hours.to_string(),
                            &clients.to_string(),
                            &project.to_string(),
                        ));
                        let weekly = rate * hours;
                        let monthly = weekly * WEEKS_PER_MONTH + clients * project;
                        assert_eq!(r.weekly, weekly);
                        assert!(approx(r.monthly, monthly, 1e-9));
                        assert!(approx(r.yearly, monthly * 12.0, 1e-6));
                    }
                }
            }
        }
    }

    #[test]
    fn market_rate_comes_from_selected_service() {
        let mut form = inputs("60", "10", "", "");
        form.service = Some(ServiceKind::Chatbot);
        let r = calculate(&form);
        assert_eq!(r.market_rate, 50.0);
        assert_eq!(r.rate_comparison, RateComparison::Above);
        assert_eq!(r.service_name(), "AI Chatbot Development");

        form.service = Some(ServiceKind::Consulting);
        assert_eq!(calculate(&form).rate_comparison, RateComparison::Below);

        form.service = Some(ServiceKind::DataAnalysis);
        assert_eq!(calculate(&form).rate_comparison, RateComparison::At);
    }

    #[test]
    fn comparison_matches_sign_of_difference() {
        for (rate, market) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (25.0, 25.0), (-5.0, 0.0)] {
            let expected = match (rate - market).partial_cmp(&0.0) {
                Some(std::cmp::Ordering::Greater) => RateComparison::Above,
                Some(std::cmp::Ordering::Less) => RateComparison::Below,
                _ => RateComparison::At,
            };
            assert_eq!(RateComparison::compare(rate, market), expected);
        }
        assert_eq!(RateComparison::Above.to_string(), "above");
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(parse_amount("50"), 50.0);
        assert_eq!(parse_amount("  7.5 "), 7.5);
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("12."), 12.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("1e999"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("$40"), 0.0);
    }

    #[test]
    fn garbage_inputs_degrade_to_zero() {
        let r = calculate(&inputs("lots", "", "many", "?"));
        assert_eq!(r.weekly, 0.0);
        assert_eq!(r.monthly, 0.0);
        assert_eq!(r.rate_comparison, RateComparison::At);
    }

    #[test]
    fn overflowing_income_reads_as_infinity() {
        use crate::utils::format_usd;
        let r = calculate(&inputs("1e300", "1e300", "0", "0"));
        assert!(r.weekly.is_infinite());
        assert_eq!(format_usd(r.weekly), "$Infinity");
        assert_eq!(format_usd(r.yearly), "$Infinity");
    }
}
