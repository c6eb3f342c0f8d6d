use serde::{Deserialize, Serialize};

use crate::presentation::ColorDomain;
use crate::utils::constants::{LEGEND_STOP_COUNT, LEGEND_TICK_COUNT, LEGEND_TITLE, TEMP_UNIT};

/// One gradient stop: `offset` runs `0.0..=1.0` along the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendStop {
    pub offset: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendTick {
    pub value: f64,
    pub label: String,
}

/// Horizontal colour bar explaining the average-temperature scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub stops: Vec<LegendStop>,
    pub ticks: Vec<LegendTick>,
}

impl Legend {
    pub fn from_domain(domain: &ColorDomain) -> Self {
        let stops = evenly_spaced(LEGEND_STOP_COUNT)
            .map(|offset| LegendStop {
                offset,
                value: domain.value_at(offset),
            })
            .collect();

        let ticks = evenly_spaced(LEGEND_TICK_COUNT)
            .map(|offset| {
                let value = domain.value_at(offset);
                LegendTick {
                    value,
                    label: format!("{:.1}{}", value, TEMP_UNIT),
                }
            })
            .collect();

        Self {
            title: LEGEND_TITLE.to_string(),
            stops,
            ticks,
        }
    }
}

fn evenly_spaced(count: usize) -> impl Iterator<Item = f64> {
    let last = count.saturating_sub(1).max(1) as f64;
    (0..count).map(move |i| i as f64 / last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_legend_spans_domain() {
        let legend = Legend::from_domain(&ColorDomain {
            min: 20.0,
            max: 80.0,
        });

        assert_eq!(legend.title, "Average Temperature (°F)");
        assert_eq!(legend.stops.len(), 11);
        assert_eq!(legend.stops[0], LegendStop { offset: 0.0, value: 20.0 });
        assert_eq!(legend.stops[10], LegendStop { offset: 1.0, value: 80.0 });
        assert!((legend.stops[3].value - 38.0).abs() < 1e-9);

        let labels: Vec<&str> = legend.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["20.0°F", "50.0°F", "80.0°F"]);
    }

    #[test]
    fn test_single_value_domain() {
        let legend = Legend::from_domain(&ColorDomain {
            min: 64.0,
            max: 64.0,
        });

        assert!(legend.stops.iter().all(|s| s.value == 64.0));
        assert_eq!(legend.ticks.len(), 3);
        assert!(legend.ticks.iter().all(|t| t.label == "64.0°F"));
    }
}
