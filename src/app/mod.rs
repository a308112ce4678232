//! `DeckApp`: the top-level egui application state.
//!
//! This module declares the `DeckApp` struct and the `eframe::App` frame
//! loop. Drawing is split across the sibling sub-modules:
//!
//! - `header`:     wordmark and tagline
//! - `navigation`: radial topic nodes and selection
//! - `panel`:      slide-over panel with its overlay and close control
//! - `content`:    per-topic panel bodies

pub mod content;
pub mod header;
pub mod navigation;
pub mod panel;

use std::time::{Duration, Instant};

use eframe::egui;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use cerca_deck::config::DeckConfig;
use cerca_deck::content::WaveformPair;
use cerca_deck::map::Viewport;
use cerca_deck::render::palette::INK;
use cerca_deck::render::{AnimationLoop, PainterCanvas};
use cerca_deck::shell::{PresentationShell, Transition};

/// Font family name used for display text.
pub const SERIF: &str = "serif";

const SERIF_PATHS: [&str; 5] = [
    "/System/Library/Fonts/Supplemental/Georgia.ttf",
    "/Library/Fonts/Georgia.ttf",
    "C:\\Windows\\Fonts\\georgia.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
];

// ─── Application state ───────────────────────────────────────────────────────

pub struct DeckApp {
    pub shell: PresentationShell,
    pub animation: AnimationLoop,
    pub waveforms: WaveformPair,
    pub rng: SmallRng,
    pub app_start: Instant,
    /// When the current topic's content appeared; chart reveals count from here.
    pub content_since: Duration,
}

impl DeckApp {
    pub fn new(config: DeckConfig) -> Self {
        let rng = match config.map.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
            None => SmallRng::from_entropy(),
        };
        Self {
            shell: PresentationShell::new(config.timing.clone()),
            animation: AnimationLoop::new(config.map),
            waveforms: WaveformPair::default(),
            rng,
            app_start: Instant::now(),
            content_since: Duration::ZERO,
        }
    }

    /// Time since start-up; the shell and waveforms run on this clock.
    pub fn now(&self) -> Duration {
        self.app_start.elapsed()
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::PanelOpened(topic) => {
                log::info!("Opened panel: {}", topic.subtitle());
            }
            Transition::TopicCleared => {
                self.waveforms.stop_all();
            }
        }
    }

    /// Paint the proximity map over `rect` and schedule the next frame.
    fn draw_background(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, rect: egui::Rect, now: Duration) {
        let painter = ui.painter_at(rect);
        let mut canvas = PainterCanvas::new(&painter);
        let mut scheduler = ctx.clone();
        let viewport = Viewport::new(rect.width(), rect.height());
        self.animation.tick(
            &mut canvas,
            &mut scheduler,
            rect.min,
            viewport,
            self.shell.intensity(now),
        );
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now();

        if let Some(transition) = self.shell.update(now) {
            self.apply_transition(transition);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close_panel(now);
        }
        self.waveforms.update(now, &mut self.rng);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(INK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.draw_background(ui, ctx, rect, now);
                self.draw_header(ui, rect);
                self.draw_tagline(ui, ctx, rect);
                self.draw_navigation(ui, ctx, rect, now);
            });

        self.draw_panel(ctx, now);

        // Timers still fire if the map loop has been torn down.
        let deadlines = [self.shell.next_deadline(now), self.waveforms.next_due(now)];
        if let Some(next) = deadlines.into_iter().flatten().min() {
            ctx.request_repaint_after(next);
        }
    }
}

/// Register the display serif, falling back to the default proportional stack.
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let mut serif = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for path in &SERIF_PATHS {
        if let Ok(data) = std::fs::read(path) {
            fonts
                .font_data
                .insert(SERIF.to_owned(), egui::FontData::from_owned(data));
            serif.insert(0, SERIF.to_owned());
            log::info!("Loaded display font from {}", path);
            break;
        }
    }

    fonts
        .families
        .insert(egui::FontFamily::Name(SERIF.into()), serif);
    ctx.set_fonts(fonts);
}

pub fn serif(size: f32) -> egui::FontId {
    egui::FontId::new(size, egui::FontFamily::Name(SERIF.into()))
}
