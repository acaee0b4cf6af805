//! FlowDeck - Workflow builder UI
//!
//! Renders a question-classifier workflow node: its configured model and the
//! topic list it classifies into, with a settings panel for picking the
//! model from the provider catalog.

#![warn(missing_docs)]

mod app;
mod logging;

use app::FlowDeckApp;
use flowdeck_ui::UserConfig;
use tracing::info;

fn main() -> eframe::Result {
    logging::init();

    let config = UserConfig::load();
    info!("starting FlowDeck");

    let size = [
        config.window_width.unwrap_or(1024) as f32,
        config.window_height.unwrap_or(720) as f32,
    ];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("FlowDeck v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size(size)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "FlowDeck",
        native_options,
        Box::new(move |cc| Ok(Box::new(FlowDeckApp::new(cc, config)))),
    )
}
