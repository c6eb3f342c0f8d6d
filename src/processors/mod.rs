pub mod aggregator;
pub mod filter;
pub mod ingestion;
pub mod pipeline;

pub use aggregator::{aggregate, Aggregator, PartialAggregates};
pub use filter::{evaluate, FilterSession, VisibleRegions};
pub use ingestion::{coerce_observation, ingest, IngestionReport, Ingestor};
pub use pipeline::{LoadedDataset, WeatherPipeline};
