pub mod aggregate;
pub mod region;
pub mod thresholds;
pub mod weather;

pub use aggregate::{RegionAccumulator, RegionAggregate, RegionAggregates};
pub use region::{Region, RegionCatalog};
pub use thresholds::{FilterThresholds, ThresholdBounds};
pub use weather::{RawWeatherRow, WeatherRecord, WeatherRecordBuilder};
