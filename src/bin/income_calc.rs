use anyhow::{Context, Result, bail};
use clap::Parser;
use money_machine::{
    CalculationResult, IncomeInputs, SERVICE_TYPES, ServiceKind, calculate,
    utils::{format_usd, format_usd_per},
};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Project monthly and yearly income for an AI service business.
///
/// Numbers are read leniently: "45/hr" counts as 45 and anything
/// unreadable counts as 0.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Service id (see --list-services)
    #[arg(long)]
    service: Option<String>,

    /// Your hourly rate in dollars
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    rate: String,

    /// Billable hours per week
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    hours: String,

    /// Project clients per month
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    clients: String,

    /// Average project value in dollars
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    project_value: String,

    /// Print the result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// List known services with their market rates and exit
    #[arg(long, default_value_t = false)]
    list_services: bool,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Service")]
    label: &'static str,
    #[tabled(rename = "Market rate")]
    rate: String,
}

#[derive(Serialize)]
struct Report<'a> {
    service_name: &'static str,
    inputs: &'a IncomeInputs,
    result: &'a CalculationResult,
}

fn resolve_service(id: Option<&str>) -> Result<Option<ServiceKind>> {
    let Some(id) = id else {
        return Ok(None);
    };
    match ServiceKind::from_id(id.trim()) {
        Some(kind) => Ok(Some(kind)),
        None => {
            let known: Vec<&str> = SERVICE_TYPES.iter().map(|s| s.kind.id()).collect();
            bail!("unknown service '{}'; expected one of: {}", id, known.join(", "))
        }
    }
}

fn result_rows(result: &CalculationResult) -> Vec<Row> {
    vec![
        Row {
            metric: "Service",
            value: result.service_name().to_string(),
        },
        Row {
            metric: "Weekly income",
            value: format_usd(result.weekly),
        },
        Row {
            metric: "Hourly work income",
            value: format_usd_per(result.monthly_hourly_income, "month"),
        },
        Row {
            metric: "Project-based income",
            value: format_usd_per(result.monthly_project_income, "month"),
        },
        Row {
            metric: "Monthly income",
            value: format_usd(result.monthly),
        },
        Row {
            metric: "Yearly potential",
            value: format_usd(result.yearly),
        },
        Row {
            metric: "Effective hourly from projects",
            value: format_usd_per(result.hourly_from_projects, "hr"),
        },
        Row {
            metric: "Market rate",
            value: format_usd_per(result.market_rate, "hr"),
        },
        Row {
            metric: "Your rate vs market",
            value: result.rate_comparison.to_string(),
        },
    ]
}

fn service_rows() -> Vec<ServiceRow> {
    SERVICE_TYPES
        .iter()
        .map(|s| ServiceRow {
            id: s.kind.id(),
            label: s.label,
            rate: format_usd_per(s.avg_rate, "hr"),
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.list_services {
        println!("{}", Table::new(service_rows()).with(Style::rounded()));
        return Ok(());
    }

    let inputs = IncomeInputs {
        service: resolve_service(args.service.as_deref())?,
        hourly_rate: args.rate,
        hours_per_week: args.hours,
        clients_per_month: args.clients,
        project_value: args.project_value,
    };
    log::info!("Calculating income for {:?}", inputs);
    let result = calculate(&inputs);

    if args.json {
        let report = Report {
            service_name: result.service_name(),
            inputs: &inputs,
            result: &result,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to encode result as JSON")?;
        println!("{}", json);
    } else {
        println!("{}", Table::new(result_rows(&result)).with(Style::rounded()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_service_ids() {
        assert_eq!(
            resolve_service(Some("consulting")).unwrap(),
            Some(ServiceKind::Consulting)
        );
        assert_eq!(resolve_service(None).unwrap(), None);
    }

    #[test]
    fn unknown_service_lists_valid_ids() {
        let err = resolve_service(Some("astrology")).unwrap_err().to_string();
        assert!(err.contains("astrology"));
        assert!(err.contains("content-writing"));
        assert!(err.contains("tutoring"));
    }

    #[test]
    fn table_shows_rounded_dollars() {
        let inputs = IncomeInputs {
            service: Some(ServiceKind::ContentWriting),
            hourly_rate: "50".to_string(),
            hours_per_week: "20".to_string(),
            clients_per_month: "3".to_string(),
            project_value: "500".to_string(),
        };
        let rows = result_rows(&calculate(&inputs));
        let value = |metric: &str| {
            rows.iter()
                .find(|r| r.metric == metric)
                .map(|r| r.value.clone())
                .unwrap()
        };
        assert_eq!(value("Service"), "AI Content Writing");
        assert_eq!(value("Weekly income"), "$1000");
        assert_eq!(value("Monthly income"), "$5830");
        assert_eq!(value("Yearly potential"), "$69960");
        assert_eq!(value("Your rate vs market"), "above");
    }

    #[test]
    fn every_service_is_listed() {
        let rows = service_rows();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().any(|r| r.id == "chatbot" && r.rate == "$50/hr"));
    }

    #[test]
    fn json_report_names_the_service() {
        let inputs = IncomeInputs::default();
        let result = calculate(&inputs);
        let report = Report {
            service_name: result.service_name(),
            inputs: &inputs,
            result: &result,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["service_name"], "Selected Service");
        assert_eq!(json["result"]["rate_comparison"], "at");
        assert_eq!(json["result"]["service"], serde_json::Value::Null);
    }

    #[test]
    fn json_report_carries_the_service_id() {
        let inputs = IncomeInputs {
            service: Some(ServiceKind::DataAnalysis),
            ..IncomeInputs::default()
        };
        let result = calculate(&inputs);
        let report = Report {
            service_name: result.service_name(),
            inputs: &inputs,
            result: &result,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["inputs"]["service"], "data-analysis");
        assert_eq!(json["result"]["service"], "data-analysis");
    }
}
