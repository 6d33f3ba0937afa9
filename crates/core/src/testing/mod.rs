//! Mock implementations for testing.
//!
//! These are used by the crate's own tests and by downstream integration
//! tests; they live in the library (not behind `cfg(test)`) for that reason.

mod mock_relocator;
mod mock_settings_store;

pub use mock_relocator::MockRelocator;
pub use mock_settings_store::MockSettingsStore;
