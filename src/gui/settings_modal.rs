use eframe::egui;

use super::modal::{
    action_buttons,
    Modal,
    ModalConfig,
    ModalResult,
};
use crate::core::{
    Preferences,
    PreferencesUpdate,
};

#[derive(Default, Clone)]
struct SettingsDraft {
    show_meaning: bool,
    review_days: u32,
    window_width: f32,
    window_height: f32,
}

/// Edits display preferences for the current run. The drag widgets clamp
/// the values to their accepted ranges; saving hands a full update back to
/// the navigation state.
pub struct SettingsModal {
    modal: Modal<SettingsDraft>,
}

impl SettingsModal {
    pub fn new() -> Self {
        let config = ModalConfig {
            fixed_size: Some(egui::Vec2::new(260.0, 180.0)),
            ..Default::default()
        };

        Self { modal: Modal::new("Settings").with_config(config) }
    }

    pub fn open_settings(&mut self, preferences: &Preferences) {
        *self.modal.data_mut() = SettingsDraft {
            show_meaning: preferences.show_meaning,
            review_days: preferences.review_days,
            window_width: preferences.window_width,
            window_height: preferences.window_height,
        };
        self.modal.open();
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<PreferencesUpdate> {
        let result = self.modal.show(ctx, |ui, data| {
            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Review days:");
                ui.add(egui::DragValue::new(&mut data.review_days).range(1..=30));
                ui.end_row();

                ui.label("Window width:");
                ui.add(egui::DragValue::new(&mut data.window_width).range(250.0..=600.0).speed(5));
                ui.end_row();

                ui.label("Window height:");
                ui.add(
                    egui::DragValue::new(&mut data.window_height).range(200.0..=500.0).speed(5),
                );
                ui.end_row();
            });

            ui.add_space(6.0);
            ui.checkbox(&mut data.show_meaning, "Show word meanings");
            ui.add_space(12.0);

            action_buttons(ui, data, "Save", "Cancel")
        });

        if let Some(ModalResult::Confirmed(draft)) = result {
            return Some(PreferencesUpdate {
                show_meaning: Some(draft.show_meaning),
                review_days: Some(draft.review_days),
                window_width: Some(draft.window_width),
                window_height: Some(draft.window_height),
            });
        }

        None
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
