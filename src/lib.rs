pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
pub use models::{FilterThresholds, RegionAggregate, RegionAggregates, RegionCatalog, WeatherRecord};
pub use processors::{aggregate, evaluate, ingest, FilterSession, VisibleRegions};
