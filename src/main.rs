#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use rice_crop_advisor::{Cli, run_app, ui::UI_TEXT};

fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::{NativeOptions, egui};

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let export_target = args.files.export_target();

    // C. Run Native App
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(UI_TEXT.window_title)
            .with_maximized(true)
            .with_min_inner_size([720.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, export_target))),
    )
}
