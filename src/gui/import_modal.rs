use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

use super::modal::{
    Modal,
    ModalConfig,
    ModalResult,
};

#[derive(Default, Clone)]
struct ImportDraft {
    file_path: String,
}

/// Lets the user browse for a word list file. Confirming hands the chosen
/// path back to the app, which decides whether the import replaces the
/// active deck.
pub struct ImportModal {
    modal: Modal<ImportDraft>,
}

impl ImportModal {
    pub fn new() -> Self {
        let config = ModalConfig {
            fixed_size: Some(egui::Vec2::new(320.0, 140.0)),
            ..Default::default()
        };

        Self { modal: Modal::new("Import Word List").with_config(config) }
    }

    pub fn open_dialog(&mut self) {
        self.modal.open();
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        let result = self.modal.show(ctx, |ui, data| {
            ui.label("Select a word list to import:");
            ui.add_space(8.0);

            if ui.button("Browse...").clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("Text files", &["txt"])
                    .add_filter("All files", &["*"])
                    .pick_file()
                {
                    data.file_path = path.display().to_string();
                }
            }

            if !data.file_path.is_empty() {
                ui.add_space(6.0);
                ui.label(format!(
                    "Selected: {}",
                    std::path::Path::new(&data.file_path)
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                ));
            }

            ui.add_space(12.0);

            let can_confirm = !data.file_path.is_empty();
            ui.horizontal(|ui| {
                if ui.add_enabled(can_confirm, egui::Button::new("Import")).clicked() {
                    Some(ModalResult::Confirmed(data.clone()))
                } else if ui.button("Cancel").clicked() {
                    Some(ModalResult::Cancelled)
                } else {
                    None
                }
            })
            .inner
        });

        match result {
            Some(ModalResult::Confirmed(draft)) => {
                *self.modal.data_mut() = ImportDraft::default();
                Some(PathBuf::from(draft.file_path))
            }
            Some(ModalResult::Cancelled) => {
                *self.modal.data_mut() = ImportDraft::default();
                None
            }
            None => None,
        }
    }
}

impl Default for ImportModal {
    fn default() -> Self {
        Self::new()
    }
}
