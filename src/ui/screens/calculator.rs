use {
    crate::{
        data::{SERVICE_TYPES, service_type},
        models::{Accent, CalculationResult, IncomeInputs},
        ui::{AccentColor, UI_CONFIG, UI_TEXT, UiStyleExt, get_rate_color, utils::card_grid},
        utils::{format_usd, format_usd_per},
    },
    eframe::egui::{Align, Button, Color32, ComboBox, Layout, RichText, TextEdit, Ui, Vec2},
    egui_plot::{Bar, BarChart, Legend, Plot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalculatorAction {
    Calculate,
}

pub(crate) fn render_calculator(
    ui: &mut Ui,
    inputs: &mut IncomeInputs,
    result: Option<&CalculationResult>,
) -> Option<CalculatorAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(&UI_TEXT.calc_title).size(28.0).strong());
        ui.label_subdued(UI_TEXT.calc_subtitle);
    });
    ui.add_space(16.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        render_service_picker(ui, inputs);
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            amount_field(
                &mut cols[0],
                UI_TEXT.calc_rate_label,
                UI_TEXT.calc_rate_hint,
                &mut inputs.hourly_rate,
            );
            amount_field(
                &mut cols[1],
                UI_TEXT.calc_hours_label,
                UI_TEXT.calc_hours_hint,
                &mut inputs.hours_per_week,
            );
        });
        ui.columns(2, |cols| {
            amount_field(
                &mut cols[0],
                UI_TEXT.calc_clients_label,
                UI_TEXT.calc_clients_hint,
                &mut inputs.clients_per_month,
            );
            amount_field(
                &mut cols[1],
                UI_TEXT.calc_project_label,
                UI_TEXT.calc_project_hint,
                &mut inputs.project_value,
            );
        });
        ui.add_space(12.0);

        let button = Button::new(ui.button_text_primary(UI_TEXT.calc_button))
            .fill(UI_CONFIG.accents.green.0)
            .min_size(Vec2::new(ui.available_width(), 36.0));
        if ui.add(button).clicked() {
            action = Some(CalculatorAction::Calculate);
        }
    });

    if let Some(result) = result {
        ui.add_space(16.0);
        render_summary(ui, result);
        ui.add_space(12.0);
        render_breakdown(ui, result);
    }

    action
}

fn render_service_picker(ui: &mut Ui, inputs: &mut IncomeInputs) {
    ui.label(RichText::new(UI_TEXT.calc_service_label).strong());
    let selected = inputs
        .service
        .and_then(service_type)
        .map_or(UI_TEXT.calc_service_placeholder, |s| s.label);
    ComboBox::from_id_salt("calc_service")
        .selected_text(selected)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for service in &SERVICE_TYPES {
                let text = format!(
                    "{} ({})",
                    service.label,
                    format_usd_per(service.avg_rate, UI_TEXT.label_per_hour)
                );
                ui.selectable_value(&mut inputs.service, Some(service.kind), text);
            }
        });
}

fn amount_field(ui: &mut Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(RichText::new(label).strong());
    ui.add(
        TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
}

struct SummaryCard {
    title: String,
    value: String,
    color: Color32,
    footer: Option<RichText>,
}

fn render_summary(ui: &mut Ui, result: &CalculationResult) {
    let comparison = RichText::new(format!(
        "{} {} {}",
        UI_TEXT.calc_rate_prefix, result.rate_comparison, UI_TEXT.calc_rate_suffix
    ))
    .color(get_rate_color(result.rate_comparison));

    let cards = [
        SummaryCard {
            title: UI_TEXT.calc_weekly.clone(),
            value: format_usd(result.weekly),
            color: UI_CONFIG.accents.green.0,
            footer: None,
        },
        SummaryCard {
            title: UI_TEXT.calc_monthly.clone(),
            value: format_usd(result.monthly),
            color: UI_CONFIG.accents.blue.0,
            footer: None,
        },
        SummaryCard {
            title: UI_TEXT.calc_yearly.clone(),
            value: format_usd(result.yearly),
            color: UI_CONFIG.accents.purple.0,
            footer: None,
        },
        SummaryCard {
            title: UI_TEXT.calc_market_rate.to_string(),
            value: format_usd_per(result.market_rate, UI_TEXT.label_per_hour),
            color: UI_CONFIG.accents.indigo.0,
            footer: Some(comparison),
        },
    ];

    card_grid(ui, &cards, 200.0, 4, |ui, card| {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label_subdued(&card.title);
            ui.label(RichText::new(&card.value).size(24.0).strong().color(card.color));
            if let Some(footer) = &card.footer {
                ui.label(footer.clone().small());
            }
        });
    });
}

fn render_breakdown(ui: &mut Ui, result: &CalculationResult) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label_subheader(format!("{} - {}", UI_TEXT.calc_breakdown_title, result.service_name()));
        ui.add_space(6.0);

        breakdown_row(ui, UI_TEXT.calc_hourly_work, &format_usd(result.monthly_hourly_income), false);
        breakdown_row(
            ui,
            UI_TEXT.calc_project_income,
            &format_usd(result.monthly_project_income),
            false,
        );
        ui.separator();
        breakdown_row(ui, UI_TEXT.calc_total_monthly, &format_usd(result.monthly), true);
        if result.hourly_from_projects > 0.0 {
            breakdown_row(
                ui,
                UI_TEXT.calc_from_projects,
                &format_usd_per(result.hourly_from_projects, UI_TEXT.label_per_hour),
                false,
            );
        }
        ui.add_space(8.0);
        render_breakdown_chart(ui, result);
    });
}

fn breakdown_row(ui: &mut Ui, label: &str, value: &str, emphasise: bool) {
    ui.horizontal(|ui| {
        let label = RichText::new(label);
        ui.label(if emphasise { label.strong() } else { label });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let value = RichText::new(value).color(UI_CONFIG.colors.money);
            ui.label(if emphasise { value.strong().size(18.0) } else { value });
        });
    });
}

fn render_breakdown_chart(ui: &mut Ui, result: &CalculationResult) {
    let bars = vec![
        Bar::new(0.0, result.monthly_hourly_income)
            .name(UI_TEXT.calc_plot_hourly)
            .fill(Accent::Blue.colors().0)
            .width(0.6),
        Bar::new(1.0, result.monthly_project_income)
            .name(UI_TEXT.calc_plot_projects)
            .fill(Accent::Purple.colors().0)
            .width(0.6),
    ];
    let chart = BarChart::new(UI_TEXT.calc_plot_name, bars);

    Plot::new("calc_breakdown_plot")
        .height(160.0)
        .legend(Legend::default())
        .show_x(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
