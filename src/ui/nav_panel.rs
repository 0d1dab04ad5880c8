use {
    crate::{
        domain::Section,
        ui::{
            UI_CONFIG, UiStyleExt,
            ui_text::{ICON_BOOK, ICON_CALCULATOR, ICON_HOME, ICON_SPARKLES, ICON_TREND_UP},
        },
    },
    eframe::egui::{Align, Context, FontId, Layout, TopBottomPanel},
    strum::IntoEnumIterator,
};

fn nav_icon(section: Section) -> &'static str {
    match section {
        Section::Home => ICON_HOME,
        Section::Generator => ICON_SPARKLES,
        Section::Scanner => ICON_TREND_UP,
        Section::Calculator => ICON_CALCULATOR,
        Section::Resources => ICON_BOOK,
    }
}

/// Brand on the left, one tab per section on the right. Returns the clicked section.
pub(crate) fn render_navigation(ctx: &Context, active: Section) -> Option<Section> {
    let mut clicked = None;

    TopBottomPanel::top("nav_bar")
        .frame(UI_CONFIG.top_panel_frame())
        .min_height(36.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = ui.interactive_label(
                    &format!("{} Money Machine", ICON_SPARKLES),
                    false,
                    UI_CONFIG.colors.subsection_heading,
                    FontId::proportional(18.0),
                );
                if brand.clicked() {
                    clicked = Some(Section::Home);
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // right_to_left reverses order, so walk the sections backwards
                    for section in Section::iter().rev() {
                        let text = format!("{} {}", nav_icon(section), section.label());
                        if ui
                            .interactive_label(
                                &text,
                                section == active,
                                UI_CONFIG.colors.label,
                                FontId::proportional(14.0),
                            )
                            .clicked()
                        {
                            clicked = Some(section);
                        }
                    }
                });
            });
        });

    clicked
}
