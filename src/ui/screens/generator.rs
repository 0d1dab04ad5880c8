use {
    crate::{
        domain::Strategy,
        models::{
            BadgeTone, BadgeVariant, BudgetRange, StrategyGenerator, StrategyRequest,
            TimeCommitment, strategy_difficulty_variant,
        },
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            ui_text::{ICON_CLOCK, ICON_DOLLAR, ICON_SPARKLES, ICON_TARGET},
        },
        utils::{AppInstant, format_countdown, time_until},
    },
    eframe::egui::{Button, ComboBox, RichText, TextEdit, Ui, Vec2},
    strum::IntoEnumIterator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GeneratorAction {
    Generate,
}

pub(crate) fn render_generator(
    ui: &mut Ui,
    request: &mut StrategyRequest,
    generator: &StrategyGenerator,
    now: AppInstant,
) -> Option<GeneratorAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(&UI_TEXT.gen_title).size(28.0).strong());
        ui.label_subdued(&UI_TEXT.gen_subtitle);
    });
    ui.add_space(16.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new(UI_TEXT.gen_skills_label).strong());
        ui.add(
            TextEdit::multiline(&mut request.skills)
                .hint_text(UI_TEXT.gen_skills_hint)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            cols[0].label(RichText::new(UI_TEXT.gen_time_label).strong());
            let time_text = request
                .time_available
                .map_or(UI_TEXT.gen_time_placeholder, TimeCommitment::label);
            ComboBox::from_id_salt("gen_time")
                .selected_text(time_text)
                .width(cols[0].available_width())
                .show_ui(&mut cols[0], |ui| {
                    for option in TimeCommitment::iter() {
                        ui.selectable_value(&mut request.time_available, Some(option), option.label());
                    }
                });

            cols[1].label(RichText::new(UI_TEXT.gen_budget_label).strong());
            let budget_text = request
                .budget
                .map_or(UI_TEXT.gen_budget_placeholder, BudgetRange::label);
            ComboBox::from_id_salt("gen_budget")
                .selected_text(budget_text)
                .width(cols[1].available_width())
                .show_ui(&mut cols[1], |ui| {
                    for option in BudgetRange::iter() {
                        ui.selectable_value(&mut request.budget, Some(option), option.label());
                    }
                });
        });
        ui.add_space(12.0);

        let busy = generator.is_generating();
        let text = if busy {
            UI_TEXT.gen_button_busy.to_string()
        } else {
            format!("{} {}", ICON_SPARKLES, UI_TEXT.gen_button)
        };
        let button = Button::new(ui.button_text_primary(text))
            .fill(UI_CONFIG.accents.purple.0)
            .min_size(Vec2::new(ui.available_width(), 36.0));
        if ui.add_enabled(!busy, button).clicked() {
            action = Some(GeneratorAction::Generate);
        }
        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                if let Some(deadline) = generator.next_deadline() {
                    ui.label_subdued(format!(
                        "{} {}",
                        format_countdown(time_until(deadline, now)),
                        UI_TEXT.label_seconds_left
                    ));
                }
            });
        }
    });

    if let Some(strategy) = generator.current() {
        ui.add_space(16.0);
        render_strategy(ui, strategy);
    }

    action
}

fn render_strategy(ui: &mut Ui, strategy: &Strategy) {
    UI_CONFIG.highlight_card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(strategy.title)
                .size(20.0)
                .strong()
                .color(UI_CONFIG.colors.money),
        );
        ui.label(strategy.description);
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(ICON_DOLLAR).color(UI_CONFIG.colors.money));
            ui.label(RichText::new(strategy.potential).strong());
            ui.add_space(12.0);
            ui.label(ICON_CLOCK);
            ui.label(strategy.timeframe);
            ui.add_space(12.0);
            ui.label(ICON_TARGET);
            ui.badge(
                strategy.difficulty,
                BadgeTone::Purple,
                strategy_difficulty_variant(strategy.difficulty),
            );
        });
        ui.add_space(8.0);

        ui.label_subheader(UI_TEXT.gen_steps_heading);
        for (i, step) in strategy.steps.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.badge(&(i + 1).to_string(), BadgeTone::Green, BadgeVariant::Filled);
                ui.label(*step);
            });
        }
        ui.add_space(8.0);
        ui.tag_row(strategy.tags);
    });
}
