#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use wordcard::{
    core::{
        loader,
        Preferences,
    },
    gui::TrainerApp,
};

fn main() -> eframe::Result<()> {
    let deck = loader::startup_deck();

    let preferences = Preferences::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([preferences.window_width, preferences.window_height])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Vocab Trainer",
        options,
        Box::new(|cc| Ok(Box::new(TrainerApp::new(cc, deck)))),
    )
}
