use reelgrab_core::{Config, EngineHandle, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    engine: EngineHandle,
}

impl AppState {
    pub fn new(config: Config, engine: EngineHandle) -> Self {
        Self { config, engine }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }
}
