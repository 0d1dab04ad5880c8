use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, ScrollArea},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    app::{ActiveView, SectionRouter},
    config::DF,
    domain::Section,
    engine::SeededRandom,
    trace_time,
    ui::{UI_CONFIG, render_navigation, setup_custom_visuals, utils::constrained_content},
    utils::{AppInstant, time_until},
};

#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) router: SectionRouter, // persists across sessions.
    #[serde(skip)]
    pub(crate) view: ActiveView,
    #[serde(skip)]
    pub(crate) rng: SeededRandom,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let stored = match cc.storage {
            Some(storage) if !args.fresh => eframe::get_value::<App>(storage, eframe::APP_KEY),
            _ => None,
        };
        Self::boot(stored, &args, AppInstant::now())
    }

    /// Resolve the starting state from what was saved and what was asked for.
    /// `--section` beats the saved section; `--seed` replaces the entropy source.
    pub(crate) fn boot(stored: Option<App>, args: &Cli, now: AppInstant) -> Self {
        let mut app = stored.unwrap_or_default();
        if let Some(seed) = args.seed {
            app.rng = SeededRandom::from_seed(seed);
        }
        if let Some(id) = &args.section {
            app.router = SectionRouter::new(Section::from_id(id));
        }
        app.mount(now);
        app
    }

    pub fn active_section(&self) -> Section {
        self.router.active()
    }

    /// Switch sections. Re-selecting the active one keeps its state.
    pub(crate) fn navigate(&mut self, section: Section, now: AppInstant) {
        if self.router.select(section) {
            self.mount(now);
        }
    }

    /// Replace the view with a fresh one for the active section.
    fn mount(&mut self, now: AppInstant) {
        let section = self.router.active();
        if DF.log_navigation {
            log::info!("Mount [{}] (dropping [{}])", section, self.view.section());
        }
        self.view = ActiveView::enter(section, now);
    }

    /// Advance timers of the mounted view. True when a repaint is due.
    pub(crate) fn tick(&mut self, now: AppInstant) -> bool {
        self.view.view_mut().poll(now, &mut self.rng)
    }

    fn render_central_panel(&mut self, ctx: &Context, now: AppInstant) -> Option<Section> {
        let mut target = None;
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt(self.router.active().id())
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        constrained_content(ui, |ui| {
                            target = self.view.view_mut().show(ui, now);
                        });
                    });
            });
        target
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let now = AppInstant::now();

        if self.tick(now) {
            ctx.request_repaint();
        }

        let nav_target = render_navigation(ctx, self.router.active());
        let content_target = trace_time!("Central panel", 20_000, {
            self.render_central_panel(ctx, now)
        });

        if let Some(section) = nav_target.or(content_target) {
            self.navigate(section, now);
        }

        // Wake up for the next pending completion even without input.
        if let Some(deadline) = self.view.view().next_deadline() {
            ctx.request_repaint_after(time_until(deadline, now));
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("💾 SAVE [App]: section = {}", self.router.active());
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SIMULATED_WORK_DELAY;
    use crate::models::ScanPhase;

    fn cli(section: Option<&str>) -> Cli {
        Cli {
            section: section.map(str::to_string),
            seed: Some(7),
            fresh: false,
        }
    }

    fn stored(section: Section) -> App {
        App {
            router: SectionRouter::new(section),
            ..Default::default()
        }
    }

    #[test]
    fn boots_on_home_by_default() {
        let app = App::boot(None, &cli(None), AppInstant::now());
        assert_eq!(app.active_section(), Section::Home);
        assert_eq!(app.view.section(), Section::Home);
    }

    #[test]
    fn restores_saved_section() {
        let app = App::boot(Some(stored(Section::Calculator)), &cli(None), AppInstant::now());
        assert_eq!(app.active_section(), Section::Calculator);
        assert_eq!(app.view.section(), Section::Calculator);
    }

    #[test]
    fn section_flag_overrides_saved_state() {
        let app = App::boot(
            Some(stored(Section::Calculator)),
            &cli(Some("resources")),
            AppInstant::now(),
        );
        assert_eq!(app.active_section(), Section::Resources);

        let app = App::boot(None, &cli(Some("nonsense")), AppInstant::now());
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn booting_into_scanner_starts_scanning() {
        let app = App::boot(None, &cli(Some("scanner")), AppInstant::now());
        let ActiveView::Scanner(view) = &app.view else {
            panic!("expected scanner view");
        };
        assert_eq!(view.scanner.phase(), ScanPhase::Scanning);
    }

    #[test]
    fn reselecting_keeps_view_state() {
        let now = AppInstant::now();
        let mut app = App::boot(None, &cli(Some("calculator")), now);
        if let ActiveView::Calculator(view) = &mut app.view {
            view.inputs.hourly_rate = "40".to_string();
        }
        app.navigate(Section::Calculator, now);
        let ActiveView::Calculator(view) = &app.view else {
            panic!("expected calculator view");
        };
        assert_eq!(view.inputs.hourly_rate, "40");
    }

    #[test]
    fn leaving_drops_view_state() {
        let now = AppInstant::now();
        let mut app = App::boot(None, &cli(Some("calculator")), now);
        if let ActiveView::Calculator(view) = &mut app.view {
            view.inputs.hourly_rate = "40".to_string();
            view.recalculate();
        }
        app.navigate(Section::Home, now);
        app.navigate(Section::Calculator, now);
        let ActiveView::Calculator(view) = &app.view else {
            panic!("expected calculator view");
        };
        assert!(view.inputs.hourly_rate.is_empty());
        assert!(view.result.is_none());
    }

    #[test]
    fn leaving_scanner_mid_scan_discards_it() {
        let now = AppInstant::now();
        let mut app = App::boot(None, &cli(Some("scanner")), now);
        app.navigate(Section::Resources, now);
        // The torn-down scan never lands anywhere
        assert!(!app.tick(now + SIMULATED_WORK_DELAY));
        assert_eq!(app.view.section(), Section::Resources);
    }

    #[test]
    fn reentering_scanner_rescans() {
        let now = AppInstant::now();
        let mut app = App::boot(None, &cli(Some("scanner")), now);
        assert!(app.tick(now + SIMULATED_WORK_DELAY));

        let later = now + SIMULATED_WORK_DELAY * 2;
        app.navigate(Section::Home, later);
        app.navigate(Section::Scanner, later);
        let ActiveView::Scanner(view) = &app.view else {
            panic!("expected scanner view");
        };
        assert_eq!(view.scanner.phase(), ScanPhase::Scanning);
        assert!(view.scanner.results().is_empty());
    }

    #[test]
    fn only_the_section_is_persisted() {
        let app = App::boot(None, &cli(Some("generator")), AppInstant::now());
        let json = serde_json::to_string(&app).unwrap();
        assert_eq!(json, r#"{"router":{"active":"generator"}}"#);
    }
}
