use {
    crate::{
        domain::Opportunity,
        models::{
            BadgeTone, BadgeVariant, OpportunityScanner, ScanPhase, demand_tone,
            opportunity_difficulty_tone,
        },
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            ui_text::{ICON_TREND_UP, ICON_ZAP},
            utils::card_grid,
        },
        utils::{AppInstant, format_countdown, time_until},
    },
    eframe::egui::{Align, Button, Layout, RichText, Ui},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScannerAction {
    Scan,
}

pub(crate) fn render_scanner(
    ui: &mut Ui,
    scanner: &OpportunityScanner,
    now: AppInstant,
) -> Option<ScannerAction> {
    let mut action = None;
    let scanning = scanner.phase() == ScanPhase::Scanning;

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(&UI_TEXT.scan_title).size(28.0).strong());
        ui.label_subdued(UI_TEXT.scan_subtitle);
        ui.add_space(12.0);

        let text = if scanning {
            &UI_TEXT.scan_button_busy
        } else {
            &UI_TEXT.scan_button
        };
        let button = Button::new(ui.button_text_primary(text)).fill(UI_CONFIG.accents.blue.0);
        if ui.add_enabled(!scanning, button).clicked() {
            action = Some(ScannerAction::Scan);
        }
        if scanning {
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() / 2.0 - 40.0).max(0.0));
                ui.spinner();
                if let Some(deadline) = scanner.next_deadline() {
                    ui.label_subdued(format!(
                        "{} {}",
                        format_countdown(time_until(deadline, now)),
                        UI_TEXT.label_seconds_left
                    ));
                }
            });
        }
    });
    ui.add_space(16.0);

    if scanner.results().is_empty() {
        if !scanning {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new(ICON_TREND_UP).size(40.0));
                ui.label_subdued(UI_TEXT.scan_empty);
            });
        }
    } else {
        card_grid(ui, scanner.results(), 420.0, 2, |ui, op| render_opportunity(ui, op));
    }

    action
}

fn render_opportunity(ui: &mut Ui, op: &Opportunity) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(op.title).size(17.0).strong());
                ui.label_subdued(op.category);
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.badge(op.trend, BadgeTone::Green, BadgeVariant::Outline);
            });
        });
        ui.add_space(4.0);
        ui.label(op.description);
        ui.add_space(8.0);

        ui.metric(UI_TEXT.scan_potential, op.potential, UI_CONFIG.colors.money);
        ui.metric(UI_TEXT.scan_time_to_start, op.time_to_start, UI_CONFIG.colors.label);
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            ui.badge(
                op.difficulty,
                opportunity_difficulty_tone(op.difficulty),
                BadgeVariant::Filled,
            );
            ui.badge(
                &format!("{} {}", op.demand, UI_TEXT.scan_demand_suffix),
                demand_tone(op.demand),
                BadgeVariant::Filled,
            );
            ui.label_subdued(format!("{} {}", UI_TEXT.scan_competition, op.competition));
        });
        ui.add_space(8.0);

        // Presentational only; there is no detail page behind it
        let learn = Button::new(format!("{} {}", ICON_ZAP, UI_TEXT.scan_learn_more));
        ui.add_sized([ui.available_width(), 28.0], learn);
    });
}
