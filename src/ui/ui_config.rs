use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub text_subdued: Color32,
    pub money: Color32,
    pub above_market: Color32,
    pub below_market: Color32,
    pub highlight_card: Color32,
    pub highlight_border: Color32,
}

/// Feature card accents, paired as (base, hover).
#[derive(Clone, Copy, Default)]
pub struct AccentColors {
    pub purple: (Color32, Color32),
    pub blue: (Color32, Color32),
    pub green: (Color32, Color32),
    pub indigo: (Color32, Color32),
}

/// Badge palette, paired as (background, text).
#[derive(Clone, Copy, Default)]
pub struct BadgeColors {
    pub neutral: (Color32, Color32),
    pub green: (Color32, Color32),
    pub yellow: (Color32, Color32),
    pub red: (Color32, Color32),
    pub orange: (Color32, Color32),
    pub blue: (Color32, Color32),
    pub purple: (Color32, Color32),
    pub pink: (Color32, Color32),
    pub indigo: (Color32, Color32),
    pub teal: (Color32, Color32),
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub accents: AccentColors,
    pub badges: BadgeColors,
    /// Content is centred and capped at this width on wide windows.
    pub max_content_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 200, 210),
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(190, 160, 255),
        central_panel: Color32::from_rgb(22, 20, 34),
        side_panel: Color32::from_rgb(30, 27, 46),
        card: Color32::from_rgb(36, 33, 54),
        card_border: Color32::from_rgb(62, 56, 92),
        text_subdued: Color32::GRAY,
        money: Color32::from_rgb(74, 222, 128),
        above_market: Color32::from_rgb(74, 222, 128),
        below_market: Color32::from_rgb(248, 113, 113),
        highlight_card: Color32::from_rgb(20, 46, 34),
        highlight_border: Color32::from_rgb(46, 125, 80),
    },
    accents: AccentColors {
        purple: (Color32::from_rgb(147, 51, 234), Color32::from_rgb(126, 34, 206)),
        blue: (Color32::from_rgb(37, 99, 235), Color32::from_rgb(29, 78, 216)),
        green: (Color32::from_rgb(22, 163, 74), Color32::from_rgb(21, 128, 61)),
        indigo: (Color32::from_rgb(79, 70, 229), Color32::from_rgb(67, 56, 202)),
    },
    badges: BadgeColors {
        neutral: (Color32::from_rgb(55, 55, 65), Color32::from_rgb(220, 220, 225)),
        green: (Color32::from_rgb(20, 83, 45), Color32::from_rgb(187, 247, 208)),
        yellow: (Color32::from_rgb(113, 63, 18), Color32::from_rgb(254, 240, 138)),
        red: (Color32::from_rgb(127, 29, 29), Color32::from_rgb(254, 202, 202)),
        orange: (Color32::from_rgb(124, 45, 18), Color32::from_rgb(254, 215, 170)),
        blue: (Color32::from_rgb(30, 58, 138), Color32::from_rgb(191, 219, 254)),
        purple: (Color32::from_rgb(88, 28, 135), Color32::from_rgb(233, 213, 255)),
        pink: (Color32::from_rgb(131, 24, 67), Color32::from_rgb(251, 207, 232)),
        indigo: (Color32::from_rgb(49, 46, 129), Color32::from_rgb(199, 210, 254)),
        teal: (Color32::from_rgb(19, 78, 74), Color32::from_rgb(153, 246, 228)),
    },
    max_content_width: 1100.0,
};

impl UiConfig {
    /// Frame for the Top navigation bar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the section content
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 12),
            ..Default::default()
        }
    }

    /// Frame for a content card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(14),
            ..Default::default()
        }
    }

    /// Frame for the generated strategy (green emphasis)
    pub fn highlight_card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.highlight_card,
            stroke: Stroke::new(2.0, self.colors.highlight_border),
            ..self.card_frame()
        }
    }

    /// Frame for a banner card filled with an accent color
    pub fn banner_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::NONE,
            corner_radius: CornerRadius::same(10),
            inner_margin: Margin::same(24),
            ..Default::default()
        }
    }
}
