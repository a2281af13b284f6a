#![warn(clippy::all, rust_2018_idioms)]

use textify::{AppContext, Config, HttpApi, JsonStore, TextifyApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = Config::from_env()?;
    log::info!("Using recognition service at {}", config.server_url);

    let api = HttpApi::new(&config)?;
    let store = JsonStore::open(config.store_path()).unwrap_or_else(|e| {
        log::error!("Ignoring unreadable store {}: {}", config.store_path().display(), e);
        JsonStore::empty(config.store_path())
    });
    let context = AppContext::new(config, Box::new(api), store);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Textify")
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Textify",
        native_options,
        Box::new(move |cc| Ok(Box::new(TextifyApp::new(cc, context)))),
    )?;
    Ok(())
}
