pub mod config;
pub mod engine;
pub mod matching;
pub mod registry;
pub mod relocate;
pub mod settings;
pub mod testing;
pub mod tmdb;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use engine::{create_engine, AddOutcome, Engine, EngineError, EngineHandle, RemoveOutcome};
pub use matching::{
    handle_completion, match_batch, normalize_title, parse_release_title, CompletionOutcome,
    CompletionRecord, FeedBatch, FeedItem, ParsedRelease, Resolution, VALID_RESOLUTIONS,
};
pub use registry::{Movie, MovieRegistry, MovieTorrent};
pub use relocate::{FsRelocator, RelocateError, Relocator};
pub use settings::{JsonSettingsStore, Settings, SettingsError, SettingsPatch, SettingsStore};
pub use tmdb::{TmdbClient, TmdbError, TmdbMovie};
