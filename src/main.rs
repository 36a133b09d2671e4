use clap::Parser;
use eframe::egui;

use ram_clocker::app::RamClockerApp;
use ram_clocker::cli::Cli;
use ram_clocker::state::{APP_TITLE, AppState};

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::new(cli.load_options(), cli.sample_dir.clone());
    if let Some(dir) = &cli.directory {
        state.load_startup_directory(dir);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(RamClockerApp::new(state)))),
    )
}
