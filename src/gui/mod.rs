pub mod app;
pub mod theme;

mod error_modal;
mod fonts;
mod import_modal;
mod modal;
mod settings_modal;

pub use app::TrainerApp;
