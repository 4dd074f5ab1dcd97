//! foliodesk: Ana Silveira's portfolio, rendered as a desktop environment
//!
//! The whole site is one eframe window: a header bar, sidebar shortcuts,
//! and draggable app windows (readme, cv, terminal, browser, trash and a
//! few toys) managed by `foliocore::WindowManager`.

mod apps;
mod config;
mod desktop;
mod window;
mod window_list;
mod widgets;

use desktop::DesktopApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("foliodesk=info")),
        )
        .init();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 800.0])
        .with_min_inner_size([800.0, 600.0])
        .with_title("anasilveira.dev");

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "foliodesk",
        options,
        Box::new(|cc| Box::new(DesktopApp::new(cc))),
    )
}
