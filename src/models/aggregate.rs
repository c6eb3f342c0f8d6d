use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::WeatherRecord;

/// Aggregates keyed by region code.
pub type RegionAggregates = BTreeMap<String, RegionAggregate>;

/// Summary statistics for every accepted record of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAggregate {
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub temp_samples: Vec<f64>,
    pub avg_temp: Option<f64>,
    pub sample_count: usize,
    pub stations: BTreeSet<String>,
    pub total_snow: f64,
    pub total_precip: f64,
    pub wind_samples: Vec<f64>,
    pub avg_wind: Option<f64>,
}

impl RegionAggregate {
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

/// Running state for one region while records are folded.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAccumulator {
    min_temp: f64,
    max_temp: f64,
    temp_samples: Vec<f64>,
    stations: BTreeSet<String>,
    total_snow: f64,
    total_precip: f64,
    wind_samples: Vec<f64>,
}

impl Default for RegionAccumulator {
    fn default() -> Self {
        Self {
            min_temp: f64::INFINITY,
            max_temp: f64::NEG_INFINITY,
            temp_samples: Vec::new(),
            stations: BTreeSet::new(),
            total_snow: 0.0,
            total_precip: 0.0,
            wind_samples: Vec::new(),
        }
    }
}

impl RegionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the running statistics
    pub fn observe(&mut self, record: &WeatherRecord) {
        if let Some(min) = record.temp_min {
            self.min_temp = self.min_temp.min(min);
        }
        if let Some(max) = record.temp_max {
            self.max_temp = self.max_temp.max(max);
        }
        if let Some(avg) = record.temp_avg {
            self.temp_samples.push(avg);
        }
        if let Some(station) = record.station.as_deref().filter(|s| !s.is_empty()) {
            if !self.stations.contains(station) {
                self.stations.insert(station.to_string());
            }
        }
        if let Some(snow) = record.snowfall {
            self.total_snow += snow;
        }
        if let Some(precip) = record.precipitation {
            self.total_precip += precip;
        }
        if let Some(wind) = record.wind_speed {
            self.wind_samples.push(wind);
        }
    }

    /// Combine two partial accumulators of the same region.
    ///
    /// Samples from `other` are appended after `self`'s, so merging the
    /// partitions of an ordered record sequence in order keeps input order.
    pub fn merge(mut self, other: RegionAccumulator) -> Self {
        self.min_temp = self.min_temp.min(other.min_temp);
        self.max_temp = self.max_temp.max(other.max_temp);
        self.temp_samples.extend(other.temp_samples);
        self.stations.extend(other.stations);
        self.total_snow += other.total_snow;
        self.total_precip += other.total_precip;
        self.wind_samples.extend(other.wind_samples);
        self
    }

    pub fn finish(self) -> RegionAggregate {
        let avg_temp = mean(&self.temp_samples);
        let avg_wind = mean(&self.wind_samples);

        RegionAggregate {
            min_temp: Some(self.min_temp).filter(|t| t.is_finite()),
            max_temp: Some(self.max_temp).filter(|t| t.is_finite()),
            sample_count: self.temp_samples.len(),
            avg_temp,
            temp_samples: self.temp_samples,
            stations: self.stations,
            total_snow: self.total_snow,
            total_precip: self.total_precip,
            avg_wind,
            wind_samples: self.wind_samples,
        }
    }
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
