//! Per-section view state. A view is built when its section becomes active
//! and dropped when the user leaves, so nothing survives a round trip.

use eframe::egui::Ui;

use crate::{
    domain::Section,
    engine::RandomSource,
    models::{
        CalculationResult, IncomeInputs, OpportunityScanner, StrategyGenerator, StrategyRequest,
        calculate,
    },
    ui::{
        CalculatorAction, GeneratorAction, ScannerAction, render_calculator, render_generator,
        render_home, render_resources, render_scanner,
    },
    utils::AppInstant,
};

pub(crate) trait SectionView {
    /// Advance pending work. True when something visible changed.
    fn poll(&mut self, _now: AppInstant, _rng: &mut dyn RandomSource) -> bool {
        false
    }

    fn next_deadline(&self) -> Option<AppInstant> {
        None
    }

    /// Draw the section. Returns a section to navigate to, if any.
    fn show(&mut self, ui: &mut Ui, now: AppInstant) -> Option<Section>;
}

#[derive(Debug, Default)]
pub(crate) struct HomeView;

impl SectionView for HomeView {
    fn show(&mut self, ui: &mut Ui, _now: AppInstant) -> Option<Section> {
        render_home(ui)
    }
}

#[derive(Debug, Default)]
pub(crate) struct GeneratorView {
    pub(crate) request: StrategyRequest,
    pub(crate) generator: StrategyGenerator,
}

impl GeneratorView {
    pub(crate) fn generate(&mut self, now: AppInstant) {
        self.generator.trigger(self.request.clone(), now);
    }
}

impl SectionView for GeneratorView {
    fn poll(&mut self, now: AppInstant, rng: &mut dyn RandomSource) -> bool {
        self.generator.poll(now, rng)
    }

    fn next_deadline(&self) -> Option<AppInstant> {
        self.generator.next_deadline()
    }

    fn show(&mut self, ui: &mut Ui, now: AppInstant) -> Option<Section> {
        if let Some(GeneratorAction::Generate) =
            render_generator(ui, &mut self.request, &self.generator, now)
        {
            self.generate(now);
        }
        None
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScannerView {
    pub(crate) scanner: OpportunityScanner,
}

impl ScannerView {
    /// Mounting the scanner kicks off a scan straight away.
    pub(crate) fn mounted(now: AppInstant) -> Self {
        let mut view = Self::default();
        view.scanner.trigger(now);
        view
    }
}

impl SectionView for ScannerView {
    fn poll(&mut self, now: AppInstant, rng: &mut dyn RandomSource) -> bool {
        self.scanner.poll(now, rng)
    }

    fn next_deadline(&self) -> Option<AppInstant> {
        self.scanner.next_deadline()
    }

    fn show(&mut self, ui: &mut Ui, now: AppInstant) -> Option<Section> {
        if let Some(ScannerAction::Scan) = render_scanner(ui, &self.scanner, now) {
            self.scanner.trigger(now);
        }
        None
    }
}

#[derive(Debug, Default)]
pub(crate) struct CalculatorView {
    pub(crate) inputs: IncomeInputs,
    pub(crate) result: Option<CalculationResult>,
}

impl CalculatorView {
    pub(crate) fn recalculate(&mut self) {
        self.result = Some(calculate(&self.inputs));
    }
}

impl SectionView for CalculatorView {
    fn show(&mut self, ui: &mut Ui, _now: AppInstant) -> Option<Section> {
        if let Some(CalculatorAction::Calculate) =
            render_calculator(ui, &mut self.inputs, self.result.as_ref())
        {
            self.recalculate();
        }
        None
    }
}

#[derive(Debug, Default)]
pub(crate) struct ResourcesView;

impl SectionView for ResourcesView {
    fn show(&mut self, ui: &mut Ui, _now: AppInstant) -> Option<Section> {
        render_resources(ui);
        None
    }
}

/// State of whichever section is mounted.
#[derive(Debug)]
pub(crate) enum ActiveView {
    Home(HomeView),
    Generator(GeneratorView),
    Scanner(ScannerView),
    Calculator(CalculatorView),
    Resources(ResourcesView),
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Home(HomeView)
    }
}

impl ActiveView {
    /// Fresh state for `section`.
    pub(crate) fn enter(section: Section, now: AppInstant) -> Self {
        match section {
            Section::Home => Self::Home(HomeView),
            Section::Generator => Self::Generator(GeneratorView::default()),
            Section::Scanner => Self::Scanner(ScannerView::mounted(now)),
            Section::Calculator => Self::Calculator(CalculatorView::default()),
            Section::Resources => Self::Resources(ResourcesView),
        }
    }

    pub(crate) fn section(&self) -> Section {
        match self {
            Self::Home(_) => Section::Home,
            Self::Generator(_) => Section::Generator,
            Self::Scanner(_) => Section::Scanner,
            Self::Calculator(_) => Section::Calculator,
            Self::Resources(_) => Section::Resources,
        }
    }

    pub(crate) fn view_mut(&mut self) -> &mut dyn SectionView {
        match self {
            Self::Home(v) => v,
            Self::Generator(v) => v,
            Self::Scanner(v) => v,
            Self::Calculator(v) => v,
            Self::Resources(v) => v,
        }
    }

    pub(crate) fn view(&self) -> &dyn SectionView {
        match self {
            Self::Home(v) => v,
            Self::Generator(v) => v,
            Self::Scanner(v) => v,
            Self::Calculator(v) => v,
            Self::Resources(v) => v,
        }
    }
}
