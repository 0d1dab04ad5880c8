use eframe::egui::{Context, Ui, Visuals};

use crate::ui::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.accents.purple.0;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

/// How many cards fit side by side for the given width.
pub fn responsive_columns(available_width: f32, min_card_width: f32, max_columns: usize) -> usize {
    if min_card_width <= 0.0 || !available_width.is_finite() {
        return 1;
    }
    ((available_width / min_card_width).floor() as usize).clamp(1, max_columns.max(1))
}

/// Lays items out in rows of equal-width columns.
pub fn card_grid<T>(
    ui: &mut Ui,
    items: &[T],
    min_card_width: f32,
    max_columns: usize,
    mut render: impl FnMut(&mut Ui, &T),
) {
    let columns = responsive_columns(ui.available_width(), min_card_width, max_columns);
    for row in items.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, item) in cols.iter_mut().zip(row) {
                render(col, item);
            }
        });
        ui.add_space(8.0);
    }
}

/// Centres content and caps its width on wide windows.
pub fn constrained_content<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let width = ui.available_width().min(UI_CONFIG.max_content_width);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_width() {
        assert_eq!(responsive_columns(1000.0, 300.0, 4), 3);
        assert_eq!(responsive_columns(2000.0, 300.0, 4), 4);
        assert_eq!(responsive_columns(100.0, 300.0, 4), 1);
    }

    #[test]
    fn degenerate_inputs_give_one_column() {
        assert_eq!(responsive_columns(f32::NAN, 300.0, 4), 1);
        assert_eq!(responsive_columns(800.0, 0.0, 4), 1);
        assert_eq!(responsive_columns(800.0, 100.0, 0), 1);
    }
}
