//! Runtime settings and their persistence.

mod store;
mod types;

pub use store::{JsonSettingsStore, SettingsError, SettingsStore};
pub use types::{Settings, SettingsPatch};
