use {
    crate::{
        data::{FEATURES, STATS, TESTIMONIALS},
        domain::{Feature, Section, Stat, Testimonial},
        models::{BadgeTone, BadgeVariant, feature_accent},
        ui::{
            AccentColor, UI_CONFIG, UI_TEXT, UiStyleExt,
            ui_text::ICON_STAR,
            utils::card_grid,
        },
    },
    eframe::egui::{Align, Button, Layout, RichText, Ui, Vec2},
};

pub(crate) fn render_home(ui: &mut Ui) -> Option<Section> {
    let mut target = None;

    render_hero(ui, &mut target);
    ui.add_space(32.0);

    card_grid(ui, &STATS, 200.0, 4, render_stat);
    ui.add_space(32.0);

    card_grid(ui, &FEATURES, 240.0, 4, |ui, feature| {
        if render_feature(ui, feature) {
            target = Some(feature.target);
        }
    });
    ui.add_space(32.0);

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(&UI_TEXT.home_stories_title).strong());
        ui.label_subdued(&UI_TEXT.home_stories_subtitle);
    });
    ui.add_space(12.0);
    card_grid(ui, &TESTIMONIALS, 280.0, 3, render_testimonial);
    ui.add_space(32.0);

    render_final_cta(ui, &mut target);
    target
}

fn render_hero(ui: &mut Ui, target: &mut Option<Section>) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.badge(&UI_TEXT.home_badge, BadgeTone::Purple, BadgeVariant::Filled);
        ui.add_space(12.0);
        ui.label(
            RichText::new(&UI_TEXT.home_title_top)
                .size(40.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label(
            RichText::new(&UI_TEXT.home_title_bottom)
                .size(40.0)
                .strong()
                .color(UI_CONFIG.colors.subsection_heading),
        );
        ui.add_space(12.0);
        ui.set_max_width(640.0);
        ui.label(RichText::new(&UI_TEXT.home_subtitle).size(16.0));
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            // Rough centring for the button pair
            let pair_width = 420.0;
            ui.add_space(((ui.available_width() - pair_width) / 2.0).max(0.0));
            let strategy = Button::new(ui.button_text_primary(&UI_TEXT.home_cta_strategy))
                .fill(UI_CONFIG.accents.purple.0)
                .min_size(Vec2::new(200.0, 40.0));
            if ui.add(strategy).clicked() {
                *target = Some(Section::Generator);
            }
            let explore = Button::new(&UI_TEXT.home_cta_explore).min_size(Vec2::new(200.0, 40.0));
            if ui.add(explore).clicked() {
                *target = Some(Section::Scanner);
            }
        });
    });
}

fn render_stat(ui: &mut Ui, stat: &Stat) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(stat.icon).size(24.0));
            ui.label(
                RichText::new(stat.value)
                    .size(22.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label_subdued(stat.label);
        });
    });
}

/// True when the card's call to action was clicked.
fn render_feature(ui: &mut Ui, feature: &Feature) -> bool {
    let (base, hover) = feature_accent(feature.color).colors();
    let mut clicked = false;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(feature.icon).size(28.0).color(hover));
        ui.label(RichText::new(feature.title).strong().size(16.0));
        ui.label_subdued(feature.description);
        ui.add_space(8.0);
        let button = Button::new(ui.button_text_primary(&UI_TEXT.home_get_started)).fill(base);
        clicked = ui
            .add_sized([ui.available_width(), 30.0], button)
            .clicked();
    });
    clicked
}

fn render_testimonial(ui: &mut Ui, testimonial: &Testimonial) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(testimonial.name).strong());
                ui.label_subdued(testimonial.role);
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.badge(testimonial.income, BadgeTone::Green, BadgeVariant::Filled);
            });
        });
        ui.add_space(6.0);
        ui.label(RichText::new(format!("\"{}\"", testimonial.quote)).italics());
        ui.label(RichText::new(ICON_STAR.repeat(5)).small());
    });
}

fn render_final_cta(ui: &mut Ui, target: &mut Option<Section>) {
    UI_CONFIG
        .banner_frame(UI_CONFIG.accents.indigo.1)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&UI_TEXT.home_final_title)
                        .size(26.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(8.0);
                ui.label(&UI_TEXT.home_final_body);
                ui.add_space(12.0);
                let button = Button::new(
                    RichText::new(&UI_TEXT.home_final_button)
                        .strong()
                        .color(UI_CONFIG.accents.purple.1),
                )
                .fill(UI_CONFIG.colors.heading)
                .min_size(Vec2::new(260.0, 40.0));
                if ui.add(button).clicked() {
                    *target = Some(Section::Generator);
                }
            });
        });
}
