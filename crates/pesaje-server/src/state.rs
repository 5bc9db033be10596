use application::MeasurementService;
use infrastructure::ServerConfig;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub service: MeasurementService,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(service: MeasurementService, config: ServerConfig) -> Self {
        Self { service, config }
    }

    pub fn static_dir(&self) -> &str {
        &self.config.static_dir
    }
}
