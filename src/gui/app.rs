use eframe::egui;

use super::{
    error_modal::ErrorModal,
    fonts,
    import_modal::ImportModal,
    settings_modal::SettingsModal,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::core::{
    loader,
    Deck,
    NavigationState,
};

pub struct TrainerApp {
    nav: NavigationState,
    theme: Theme,

    // Modals
    settings_modal: SettingsModal,
    import_modal: ImportModal,
    error_modal: ErrorModal,
}

impl TrainerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, deck: Deck) -> Self {
        fonts::install_cjk_fallback(&cc.egui_ctx);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);

        let mut nav = NavigationState::new();
        if nav.load(deck).is_err() {
            // Startup decks are never empty, but the builtin one covers
            // any caller that slips one through.
            let _ = nav.load(loader::builtin_deck());
        }

        Self {
            nav,
            theme,
            settings_modal: SettingsModal::new(),
            import_modal: ImportModal::new(),
            error_modal: ErrorModal::new(),
        }
    }

    fn import_word_list(&mut self, path: &std::path::Path) {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("the selected file")
            .to_string();

        match loader::try_load(path) {
            Ok(deck) => {
                let count = deck.len();
                if self.nav.load(deck).is_ok() {
                    println!("Imported {} words from {}", count, path.display());
                }
            }
            Err(e) => {
                // The active deck stays as it was.
                self.error_modal.show_error(
                    "Import Error",
                    format!("Unable to import {}", filename),
                    Some(e.to_string()),
                );
            }
        }
    }

    fn top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Settings").clicked() {
                    self.settings_modal.open_settings(self.nav.preferences());
                }
                if ui.button("Import").clicked() {
                    self.import_modal.open_dialog();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("{} words", self.nav.deck_len()));
                });
            });
        });
    }

    fn navigation_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("navigation_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Previous").clicked() {
                    self.nav.previous();
                }
                if ui.button("Next").clicked() {
                    self.nav.next();
                }
            });
            ui.add_space(4.0);
        });
    }

    fn word_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let Some(entry) = self.nav.current() else {
                    ui.add_space(40.0);
                    ui.label(self.theme.hint("No words loaded"));
                    return;
                };

                ui.add_space(24.0);
                ui.label(self.theme.bold(entry.word()).size(26.0));
                ui.add_space(12.0);

                if self.nav.preferences().show_meaning {
                    ui.label(entry.meaning());
                } else {
                    ui.label(self.theme.hint("Enable meaning display in Settings"));
                }
            });
        });
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.top_panel(ctx);
        self.navigation_panel(ctx);
        self.word_panel(ctx);

        if let Some(path) = self.import_modal.show(ctx) {
            self.import_word_list(&path);
        }

        if let Some(update) = self.settings_modal.show(ctx) {
            self.nav.set_preferences(update);
            let preferences = self.nav.preferences();
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                preferences.window_width,
                preferences.window_height,
            )));
        }

        self.error_modal.show(ctx, &self.theme);
    }
}
