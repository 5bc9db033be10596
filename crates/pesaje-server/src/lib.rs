pub mod api;
pub mod error;
pub mod state;
pub mod views;

use application::MeasurementService;
use domain::SystemClock;
use infrastructure::{PostgresMeasurementRepository, ServerConfig};
use sqlx::PgPool;
use state::AppState;
use std::sync::Arc;

pub async fn setup_app_state(pool: PgPool, config: ServerConfig) -> Arc<AppState> {
    let repository = Arc::new(PostgresMeasurementRepository::new(pool));
    let service = MeasurementService::new(repository, Arc::new(SystemClock))
        .with_co2_factor(config.co2_factor);

    Arc::new(AppState::new(service, config))
}
