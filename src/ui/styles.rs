use {
    crate::{
        models::{Accent, BadgeTone, BadgeVariant, RateComparison},
        ui::UI_CONFIG,
    },
    eframe::egui::{
        Color32, CornerRadius, FontId, Frame, Margin, Response, RichText, Sense, Stroke,
        StrokeKind, Ui, Vec2, WidgetInfo, WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait ToneColor {
    /// (background, text)
    fn colors(&self) -> (Color32, Color32);
}

impl ToneColor for BadgeTone {
    fn colors(&self) -> (Color32, Color32) {
        let b = &UI_CONFIG.badges;
        match self {
            Self::Neutral => b.neutral,
            Self::Green => b.green,
            Self::Yellow => b.yellow,
            Self::Red => b.red,
            Self::Orange => b.orange,
            Self::Blue => b.blue,
            Self::Purple => b.purple,
            Self::Pink => b.pink,
            Self::Indigo => b.indigo,
            Self::Teal => b.teal,
        }
    }
}

pub trait AccentColor {
    /// (base, hover)
    fn colors(&self) -> (Color32, Color32);
}

impl AccentColor for Accent {
    fn colors(&self) -> (Color32, Color32) {
        let a = &UI_CONFIG.accents;
        match self {
            Self::Purple => a.purple,
            Self::Blue => a.blue,
            Self::Green => a.green,
            Self::Indigo => a.indigo,
        }
    }
}

pub fn get_rate_color(comparison: RateComparison) -> Color32 {
    match comparison {
        RateComparison::Above => UI_CONFIG.colors.above_market,
        RateComparison::Below => UI_CONFIG.colors.below_market,
        RateComparison::At => UI_CONFIG.colors.text_subdued,
    }
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as a nav tab: transparent when idle, gray bg on hover, accent bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn badge(&mut self, text: &str, tone: BadgeTone, variant: BadgeVariant) -> Response;
    fn tag_row(&mut self, tags: &[&str]);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(8.0, 5.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (UI_CONFIG.accents.purple.0, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, UI_CONFIG.colors.heading)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(6),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(label);
            ui.label(RichText::new(value).small().strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn badge(&mut self, text: &str, tone: BadgeTone, variant: BadgeVariant) -> Response {
        let (bg, fg) = tone.colors();
        let (fill, stroke, text_color) = match variant {
            BadgeVariant::Filled => (bg, Stroke::NONE, fg),
            BadgeVariant::Secondary => (
                UI_CONFIG.badges.neutral.0,
                Stroke::NONE,
                UI_CONFIG.badges.neutral.1,
            ),
            BadgeVariant::Outline => (Color32::TRANSPARENT, Stroke::new(1.0, fg), fg),
        };
        Frame {
            fill,
            stroke,
            corner_radius: CornerRadius::same(10),
            inner_margin: Margin::symmetric(8, 2),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.label(RichText::new(text).small().color(text_color));
        })
        .response
    }

    fn tag_row(&mut self, tags: &[&str]) {
        self.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            for tag in tags {
                ui.badge(tag, BadgeTone::Neutral, BadgeVariant::Outline);
            }
        });
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::WHITE)
    }
}
