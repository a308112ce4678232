use eframe::egui;

use cerca_deck::config::DeckConfig;

mod app;

use app::DeckApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = DeckConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cerca — Proximity Lens",
        options,
        Box::new(move |cc| {
            app::install_fonts(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(DeckApp::new(config)))
        }),
    )
}
