mod nav_panel;
mod screens;
mod styles;
mod ui_config;
mod ui_text;
pub(crate) mod utils;

pub(crate) use nav_panel::render_navigation;

pub(crate) use screens::{
    CalculatorAction, GeneratorAction, ScannerAction, render_calculator, render_generator,
    render_home, render_resources, render_scanner,
};

pub(crate) use styles::{AccentColor, UiStyleExt, get_rate_color};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::setup_custom_visuals;
