use {
    crate::{
        data::RESOURCES,
        domain::{Resource, ResourceIcon},
        models::{BadgeVariant, resource_difficulty_tone, resource_kind_tone},
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            ui_text::{ICON_BOOK_OPEN, ICON_CLOCK, ICON_FILE, ICON_USERS, ICON_VIDEO, ICON_ZAP},
            utils::card_grid,
        },
    },
    eframe::egui::{Button, RichText, Ui},
};

fn resource_icon(icon: ResourceIcon) -> &'static str {
    match icon {
        ResourceIcon::FileText => ICON_FILE,
        ResourceIcon::Video => ICON_VIDEO,
        ResourceIcon::Users => ICON_USERS,
        ResourceIcon::Zap => ICON_ZAP,
        ResourceIcon::BookOpen => ICON_BOOK_OPEN,
    }
}

pub(crate) fn render_resources(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(&UI_TEXT.res_title).size(28.0).strong());
        ui.label_subdued(UI_TEXT.res_subtitle);
    });
    ui.add_space(16.0);

    card_grid(ui, &RESOURCES, 320.0, 3, render_resource);
    ui.add_space(16.0);

    UI_CONFIG
        .banner_frame(UI_CONFIG.accents.indigo.1)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&UI_TEXT.res_tip_title)
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(6.0);
                ui.label(UI_TEXT.res_tip_body);
            });
        });
}

fn render_resource(ui: &mut Ui, resource: &Resource) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(resource_icon(resource.icon)).size(22.0));
            ui.badge(
                resource.kind,
                resource_kind_tone(resource.kind),
                BadgeVariant::Filled,
            );
        });
        ui.add_space(4.0);
        ui.label(RichText::new(resource.title).size(16.0).strong());
        ui.label_subdued(resource.category);
        ui.add_space(4.0);
        ui.label(resource.description);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.badge(
                resource.difficulty,
                resource_difficulty_tone(resource.difficulty),
                BadgeVariant::Filled,
            );
            ui.label_subdued(format!("{} {}", ICON_CLOCK, resource.estimated_time));
        });
        ui.add_space(4.0);
        ui.tag_row(resource.tags);
        ui.add_space(8.0);

        let access = Button::new(&UI_TEXT.res_access);
        if ui.add_sized([ui.available_width(), 28.0], access).clicked() {
            log::debug!("Resource opened: {}", resource.title);
        }
    });
}
