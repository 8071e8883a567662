pub mod errors;
pub mod loader;
pub mod models;
pub mod navigation;

pub use errors::TrainerError;
pub use models::{ Deck, WordEntry };
pub use navigation::{ NavigationState, Preferences, PreferencesUpdate };
