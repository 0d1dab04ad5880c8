mod calculator;
mod generator;
mod home;
mod resources;
mod scanner;

pub(crate) use {
    calculator::{CalculatorAction, render_calculator},
    generator::{GeneratorAction, render_generator},
    home::render_home,
    resources::render_resources,
    scanner::{ScannerAction, render_scanner},
};
