//! Data the map renderer consumes: filter controls, tooltip content, shape
//! scaling and the colour scale with its legend. Nothing here draws anything.

pub mod controls;
pub mod legend;
pub mod shape;
pub mod tooltip;

pub use controls::{apply_control, filter_controls, FilterControl};
pub use legend::{Legend, LegendStop, LegendTick};
pub use shape::ShapeScale;
pub use tooltip::{TemperatureGauge, TooltipContent};

use serde::{Deserialize, Serialize};

use crate::models::RegionAggregates;

/// Extent of region average temperatures, for the sequential colour scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorDomain {
    pub min: f64,
    pub max: f64,
}

impl ColorDomain {
    /// `None` when no region has an average temperature
    pub fn from_aggregates(aggregates: &RegionAggregates) -> Option<Self> {
        aggregates
            .values()
            .filter_map(|a| a.avg_temp)
            .fold(None, |domain: Option<Self>, avg| {
                Some(match domain {
                    Some(d) => Self {
                        min: d.min.min(avg),
                        max: d.max.max(avg),
                    },
                    None => Self { min: avg, max: avg },
                })
            })
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Temperature at fraction `t` of the way from `min` to `max`
    pub fn value_at(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }

    /// Position of `value` within the domain, clamped to `0.0..=1.0`
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max > self.min {
            ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}
