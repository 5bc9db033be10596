mod entity;
mod indicators;
mod limit;
mod repository;
mod weight;

pub use entity::{MISSING_DATE, Measurement, MeasurementRecord, round_grams};
pub use indicators::{DEFAULT_CO2_FACTOR, ReductionIndicators};
pub use limit::RecentLimit;
pub use repository::MeasurementRepository;
#[cfg(test)]
pub use repository::MockMeasurementRepository;
pub use weight::{MAX_WEIGHT_G, MIN_WEIGHT_G, WEIGHT_FIELD, Weight};
