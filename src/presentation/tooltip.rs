use serde::{Deserialize, Serialize};

use crate::models::{RegionAggregate, RegionCatalog};
use crate::utils::constants::{DEPTH_UNIT, NOT_AVAILABLE, TEMP_UNIT, WIND_UNIT};

/// Min/avg/max temperature marker for the tooltip gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureGauge {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl TemperatureGauge {
    pub fn from_aggregate(aggregate: &RegionAggregate) -> Option<Self> {
        Some(Self {
            min: aggregate.min_temp?,
            avg: aggregate.avg_temp?,
            max: aggregate.max_temp?,
        })
    }

    /// Gauge domain, padded by a tenth of the range on each side
    pub fn domain(&self) -> (f64, f64) {
        let padding = (self.max - self.min) * 0.1;
        (self.min - padding, self.max + padding)
    }

    /// Fractional position of the average along the gauge, `0.0..=1.0`
    pub fn average_position(&self) -> f64 {
        let (low, high) = self.domain();
        if high > low {
            ((self.avg - low) / (high - low)).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }

    pub fn labels(&self) -> (String, String, String) {
        (
            format_temperature(self.min),
            format_temperature(self.avg),
            format_temperature(self.max),
        )
    }
}

/// Everything the hover tooltip shows for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub code: String,
    pub title: String,
    pub gauge: Option<TemperatureGauge>,
    /// Where the gauge's average marker sits, `0.0..=1.0`
    pub gauge_position: Option<f64>,
    pub data_points: usize,
    pub stations: usize,
    pub wind: String,
    pub total_snow: String,
    pub total_precip: String,
}

impl TooltipContent {
    pub fn for_region(catalog: &RegionCatalog, code: &str, aggregate: &RegionAggregate) -> Self {
        let gauge = TemperatureGauge::from_aggregate(aggregate);
        Self {
            code: code.to_string(),
            title: catalog.display_name(code).unwrap_or(code).to_string(),
            gauge,
            gauge_position: gauge.map(|g| g.average_position()),
            data_points: aggregate.sample_count,
            stations: aggregate.station_count(),
            wind: aggregate
                .avg_wind
                .map(|w| format!("{:.1} {}", w, WIND_UNIT))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            total_snow: format!("{:.1} {}", aggregate.total_snow, DEPTH_UNIT),
            total_precip: format!("{:.1} {}", aggregate.total_precip, DEPTH_UNIT),
        }
    }

    pub fn render_text(&self) -> String {
        let temperatures = match &self.gauge {
            Some(gauge) => {
                let (min, avg, max) = gauge.labels();
                format!("{} / {} / {}", min, avg, max)
            }
            None => NOT_AVAILABLE.to_string(),
        };

        format!(
            "{} ({})\n\
            Temperature (min/avg/max): {}\n\
            Data Points: {}\n\
            Weather Stations: {}\n\
            Wind Speed: {}\n\
            Total Snow: {}\n\
            Total Precip: {}",
            self.title,
            self.code,
            temperatures,
            self.data_points,
            self.stations,
            self.wind,
            self.total_snow,
            self.total_precip
        )
    }
}

fn format_temperature(value: f64) -> String {
    format!("{:.1}{}", value, TEMP_UNIT)
}
