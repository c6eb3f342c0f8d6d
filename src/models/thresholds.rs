use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{RegionAggregate, RegionAggregates};

/// Lower bounds a region's aggregate must meet to stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct FilterThresholds {
    /// `-inf` is written as `null` and read back from it
    #[serde(with = "lower_bound")]
    pub min_temp: f64,
    pub min_data_points: usize,
    pub min_stations: usize,

    #[validate(range(min = 0.0))]
    pub min_snow: f64,
}

impl FilterThresholds {
    pub fn new(min_temp: f64, min_data_points: usize, min_stations: usize, min_snow: f64) -> Self {
        Self {
            min_temp,
            min_data_points,
            min_stations,
            min_snow,
        }
    }

    /// Default thresholds for an aggregate set: the temperature floor of the
    /// coldest region, zero for everything else.
    ///
    /// With no temperature samples anywhere the temperature bound is
    /// `-inf`, which still rejects every region lacking an average.
    pub fn defaults_for(aggregates: &RegionAggregates) -> Self {
        let min_temp = ThresholdBounds::from_aggregates(aggregates)
            .temp_floor
            .unwrap_or(f64::NEG_INFINITY);

        Self::new(min_temp, 0, 0, 0.0)
    }

    pub fn with_min_temp(mut self, min_temp: f64) -> Self {
        self.min_temp = min_temp;
        self
    }

    pub fn with_min_data_points(mut self, min_data_points: usize) -> Self {
        self.min_data_points = min_data_points;
        self
    }

    pub fn with_min_stations(mut self, min_stations: usize) -> Self {
        self.min_stations = min_stations;
        self
    }

    pub fn with_min_snow(mut self, min_snow: f64) -> Self {
        self.min_snow = min_snow;
        self
    }

    /// Inclusive conjunction of all four bounds. A missing average fails.
    pub fn admits(&self, aggregate: &RegionAggregate) -> bool {
        aggregate.avg_temp.is_some_and(|t| t >= self.min_temp)
            && aggregate.sample_count >= self.min_data_points
            && aggregate.station_count() >= self.min_stations
            && aggregate.total_snow >= self.min_snow
    }
}

/// Observed data ranges used to size filter controls. Not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBounds {
    pub temp_floor: Option<f64>,
    pub temp_ceiling: Option<f64>,
    pub max_data_points: usize,
    pub max_stations: usize,
    pub max_snow: f64,
}

impl ThresholdBounds {
    pub fn from_aggregates(aggregates: &RegionAggregates) -> Self {
        let mut temp_floor: Option<f64> = None;
        let mut temp_ceiling: Option<f64> = None;
        let mut max_data_points = 0;
        let mut max_stations = 0;
        let mut max_snow = 0.0f64;

        for aggregate in aggregates.values() {
            // Regions without an average stay out of the temperature range
            if let Some(avg) = aggregate.avg_temp {
                temp_floor = Some(temp_floor.map_or(avg, |t| t.min(avg)));
                temp_ceiling = Some(temp_ceiling.map_or(avg, |t| t.max(avg)));
            }
            max_data_points = max_data_points.max(aggregate.sample_count);
            max_stations = max_stations.max(aggregate.station_count());
            max_snow = max_snow.max(aggregate.total_snow);
        }

        Self {
            temp_floor: temp_floor.map(f64::floor),
            temp_ceiling: temp_ceiling.map(f64::ceil),
            max_data_points,
            max_stations,
            max_snow,
        }
    }
}

/// JSON has no infinities, so an unbounded `min_temp` travels as `null`.
mod lower_bound {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *value == f64::NEG_INFINITY {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}
