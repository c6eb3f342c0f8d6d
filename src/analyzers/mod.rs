pub mod region_analyzer;

pub use region_analyzer::{DatasetStatistics, RegionAnalyzer, TemperatureStats};
