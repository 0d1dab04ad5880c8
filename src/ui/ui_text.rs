use std::sync::LazyLock;

pub const ICON_SPARKLES: &str = "✨";
pub const ICON_TREND_UP: &str = "📈";
pub const ICON_CALCULATOR: &str = "💰";
pub const ICON_BOOK: &str = "📚";
pub const ICON_HOME: &str = "🏠";
pub const ICON_DOLLAR: &str = "💲";
pub const ICON_CLOCK: &str = "🕑";
pub const ICON_TARGET: &str = "🎯";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_ZAP: &str = "⚡";
pub const ICON_STAR: &str = "⭐";
pub const ICON_ARROW_RIGHT: &str = "➡";
pub const ICON_EXTERNAL: &str = "↗";
pub const ICON_ROCKET: &str = "🚀";
pub const ICON_BULB: &str = "💡";
pub const ICON_PIE: &str = "📊";
pub const ICON_FILE: &str = "📄";
pub const ICON_VIDEO: &str = "🎬";
pub const ICON_USERS: &str = "👥";
pub const ICON_BOOK_OPEN: &str = "📖";

pub struct UiText {
    // --- HOME ---
    pub home_badge: String,
    pub home_title_top: String,
    pub home_title_bottom: String,
    pub home_subtitle: String,
    pub home_cta_strategy: String,
    pub home_cta_explore: String,
    pub home_get_started: String,
    pub home_stories_title: String,
    pub home_stories_subtitle: String,
    pub home_final_title: String,
    pub home_final_body: String,
    pub home_final_button: String,

    // --- STRATEGY GENERATOR ---
    pub gen_title: String,
    pub gen_subtitle: String,
    pub gen_skills_label: &'static str,
    pub gen_skills_hint: &'static str,
    pub gen_time_label: &'static str,
    pub gen_time_placeholder: &'static str,
    pub gen_budget_label: &'static str,
    pub gen_budget_placeholder: &'static str,
    pub gen_button: &'static str,
    pub gen_button_busy: &'static str,
    pub gen_steps_heading: &'static str,

    // --- OPPORTUNITY SCANNER ---
    pub scan_title: String,
    pub scan_subtitle: &'static str,
    pub scan_button: String,
    pub scan_button_busy: String,
    pub scan_potential: &'static str,
    pub scan_time_to_start: &'static str,
    pub scan_demand_suffix: &'static str,
    pub scan_competition: &'static str,
    pub scan_learn_more: String,
    pub scan_empty: &'static str,

    // --- INCOME CALCULATOR ---
    pub calc_title: String,
    pub calc_subtitle: &'static str,
    pub calc_service_label: &'static str,
    pub calc_service_placeholder: &'static str,
    pub calc_rate_label: &'static str,
    pub calc_rate_hint: &'static str,
    pub calc_hours_label: &'static str,
    pub calc_hours_hint: &'static str,
    pub calc_clients_label: &'static str,
    pub calc_clients_hint: &'static str,
    pub calc_project_label: &'static str,
    pub calc_project_hint: &'static str,
    pub calc_button: &'static str,
    pub calc_weekly: String,
    pub calc_monthly: String,
    pub calc_yearly: String,
    pub calc_market_rate: &'static str,
    pub calc_rate_prefix: &'static str,
    pub calc_rate_suffix: &'static str,
    pub calc_breakdown_title: &'static str,
    pub calc_hourly_work: &'static str,
    pub calc_project_income: &'static str,
    pub calc_total_monthly: &'static str,
    pub calc_from_projects: &'static str,
    pub calc_plot_name: &'static str,
    pub calc_plot_hourly: &'static str,
    pub calc_plot_projects: &'static str,

    // --- RESOURCE LIBRARY ---
    pub res_title: String,
    pub res_subtitle: &'static str,
    pub res_access: String,
    pub res_tip_title: String,
    pub res_tip_body: &'static str,

    // General use
    pub label_per_hour: &'static str,
    pub label_seconds_left: &'static str,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    home_badge: format!("{} AI-Powered Income Generation", ICON_ROCKET),
    home_title_top: "Turn AI Into Your".to_string(),
    home_title_bottom: "Money Machine".to_string(),
    home_subtitle: "Discover proven strategies, trending opportunities, and powerful tools to \
        generate income using artificial intelligence. Start your AI-powered business today."
        .to_string(),
    home_cta_strategy: format!("Get AI Strategy {}", ICON_ARROW_RIGHT),
    home_cta_explore: "Explore Opportunities".to_string(),
    home_get_started: format!("Get Started {}", ICON_ARROW_RIGHT),
    home_stories_title: format!("{} Success Stories", ICON_STAR),
    home_stories_subtitle: "Real people making real money with AI".to_string(),
    home_final_title: "Ready to Start Your AI Income Journey?".to_string(),
    home_final_body: "Join thousands of entrepreneurs who are already building profitable \
        AI-powered businesses. Get your personalized strategy in minutes."
        .to_string(),
    home_final_button: format!("Generate My AI Strategy {}", ICON_SPARKLES),

    gen_title: format!("{} AI Strategy Generator", ICON_SPARKLES),
    gen_subtitle: "Get personalized money-making strategies powered by AI".to_string(),
    gen_skills_label: "Your Skills/Interests",
    gen_skills_hint: "e.g., writing, design, coding, marketing",
    gen_time_label: "Time Available",
    gen_time_placeholder: "Select time commitment",
    gen_budget_label: "Starting Budget",
    gen_budget_placeholder: "Select your budget range",
    gen_button: "Generate AI Strategy",
    gen_button_busy: "Generating Strategy...",
    gen_steps_heading: "Action Steps:",

    scan_title: format!("{} AI Opportunity Scanner", ICON_TREND_UP),
    scan_subtitle: "Discover trending money-making opportunities in the AI space",
    scan_button: format!("{} Scan New Opportunities", ICON_REFRESH),
    scan_button_busy: format!("{} Scanning...", ICON_REFRESH),
    scan_potential: "Potential:",
    scan_time_to_start: "Time to Start:",
    scan_demand_suffix: "Demand",
    scan_competition: "Competition:",
    scan_learn_more: format!("Learn More {}", ICON_EXTERNAL),
    scan_empty: "Click \"Scan New Opportunities\" to discover trending money-making opportunities!",

    calc_title: format!("{} AI Income Calculator", ICON_CALCULATOR),
    calc_subtitle: "Calculate your potential earnings from AI-powered services",
    calc_service_label: "Service Type",
    calc_service_placeholder: "Select your AI service",
    calc_rate_label: "Your Hourly Rate ($)",
    calc_rate_hint: "e.g., 50",
    calc_hours_label: "Hours per Week",
    calc_hours_hint: "e.g., 20",
    calc_clients_label: "Project Clients per Month",
    calc_clients_hint: "e.g., 3",
    calc_project_label: "Average Project Value ($)",
    calc_project_hint: "e.g., 500",
    calc_button: "Calculate Income Potential",
    calc_weekly: format!("{} Weekly Income", ICON_DOLLAR),
    calc_monthly: format!("{} Monthly Income", ICON_TREND_UP),
    calc_yearly: format!("{} Yearly Potential", ICON_PIE),
    calc_market_rate: "Market Rate",
    calc_rate_prefix: "You're",
    calc_rate_suffix: "market rate",
    calc_breakdown_title: "Income Breakdown",
    calc_hourly_work: "Hourly work income:",
    calc_project_income: "Project-based income:",
    calc_total_monthly: "Total Monthly Income:",
    calc_from_projects: "Effective hourly rate from projects:",
    calc_plot_name: "Monthly income",
    calc_plot_hourly: "Hourly work",
    calc_plot_projects: "Projects",

    res_title: format!("{} Resource Library", ICON_BOOK),
    res_subtitle: "Curated resources to help you succeed with AI-powered income generation",
    res_access: format!("Access Resource {}", ICON_EXTERNAL),
    res_tip_title: format!("{} Pro Tip", ICON_BULB),
    res_tip_body: "Start with the beginner resources and gradually work your way up. The most \
        successful AI entrepreneurs combine multiple income streams - try the Strategy \
        Generator to find your perfect mix!",

    label_per_hour: "hr",
    label_seconds_left: "left",
});
