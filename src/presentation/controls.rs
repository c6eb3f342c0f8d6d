use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::{FilterThresholds, ThresholdBounds};
use crate::utils::constants::{
    CONTROL_MIN_DATA_POINTS, CONTROL_MIN_SNOW, CONTROL_MIN_STATIONS, CONTROL_MIN_TEMP,
    DATA_POINTS_STEP, SNOW_STEP, STATIONS_STEP, TEMP_STEP, TEMP_UNIT,
};

/// A range input the renderer draws for one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterControl {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
    pub unit: Option<String>,
}

impl FilterControl {
    fn new(id: &str, label: &str, min: f64, max: f64, step: f64, default_value: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            min,
            max,
            step,
            default_value,
            unit: id.contains("temp").then(|| TEMP_UNIT.to_string()),
        }
    }

    /// Text shown next to the slider, e.g. `"42.5°F"` or `"10"`
    pub fn value_label(&self, value: f64) -> String {
        format!("{}{}", value, self.unit.as_deref().unwrap_or(""))
    }
}

/// Controls for the four thresholds, in display order.
///
/// Without any temperature averages the temperature range collapses to `0..0`.
pub fn filter_controls(bounds: &ThresholdBounds, defaults: &FilterThresholds) -> Vec<FilterControl> {
    let temp_floor = bounds.temp_floor.unwrap_or(0.0);
    let temp_ceiling = bounds.temp_ceiling.unwrap_or(temp_floor);
    let temp_default = if defaults.min_temp.is_finite() {
        defaults.min_temp
    } else {
        temp_floor
    };

    vec![
        FilterControl::new(
            CONTROL_MIN_TEMP,
            "Min Temperature (°F)",
            temp_floor,
            temp_ceiling,
            TEMP_STEP,
            temp_default,
        ),
        FilterControl::new(
            CONTROL_MIN_DATA_POINTS,
            "Min Data Points",
            0.0,
            bounds.max_data_points as f64,
            DATA_POINTS_STEP,
            defaults.min_data_points as f64,
        ),
        FilterControl::new(
            CONTROL_MIN_STATIONS,
            "Min Weather Stations",
            0.0,
            bounds.max_stations as f64,
            STATIONS_STEP,
            defaults.min_stations as f64,
        ),
        FilterControl::new(
            CONTROL_MIN_SNOW,
            "Min Total Snow (mm)",
            0.0,
            bounds.max_snow,
            SNOW_STEP,
            defaults.min_snow,
        ),
    ]
}

/// Apply a control's new value to a set of thresholds.
///
/// Count controls truncate toward zero and clamp negatives to zero.
pub fn apply_control(thresholds: FilterThresholds, id: &str, value: f64) -> Result<FilterThresholds> {
    if value.is_nan() {
        return Err(ProcessingError::InvalidFormat(format!(
            "Control {} received a non-numeric value",
            id
        )));
    }

    let count = value.max(0.0) as usize;
    let updated = match id {
        CONTROL_MIN_TEMP => thresholds.with_min_temp(value),
        CONTROL_MIN_DATA_POINTS => thresholds.with_min_data_points(count),
        CONTROL_MIN_STATIONS => thresholds.with_min_stations(count),
        CONTROL_MIN_SNOW => thresholds.with_min_snow(value),
        _ => {
            return Err(ProcessingError::InvalidFormat(format!(
                "Unknown filter control: {}",
                id
            )))
        }
    };

    updated.validate()?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ThresholdBounds {
        ThresholdBounds {
            temp_floor: Some(12.0),
            temp_ceiling: Some(81.0),
            max_data_points: 365,
            max_stations: 14,
            max_snow: 2450.0,
        }
    }

    #[test]
    fn test_controls_follow_bounds() {
        let defaults = FilterThresholds::new(12.0, 0, 0, 0.0);
        let controls = filter_controls(&bounds(), &defaults);

        let ids: Vec<&str> = controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["min-temp", "min-data-points", "min-stations", "min-snow"]);

        assert_eq!(controls[0].min, 12.0);
        assert_eq!(controls[0].max, 81.0);
        assert_eq!(controls[0].step, 0.5);
        assert_eq!(controls[0].default_value, 12.0);
        assert_eq!(controls[1].max, 365.0);
        assert_eq!(controls[1].step, 10.0);
        assert_eq!(controls[2].step, 1.0);
        assert_eq!(controls[3].max, 2450.0);
    }

    #[test]
    fn test_value_labels() {
        let controls = filter_controls(&bounds(), &FilterThresholds::new(12.0, 0, 0, 0.0));

        assert_eq!(controls[0].value_label(42.5), "42.5°F");
        assert_eq!(controls[0].value_label(12.0), "12°F");
        assert_eq!(controls[2].value_label(3.0), "3");
    }

    #[test]
    fn test_controls_without_temperatures() {
        let empty = ThresholdBounds {
            temp_floor: None,
            temp_ceiling: None,
            max_data_points: 0,
            max_stations: 0,
            max_snow: 0.0,
        };
        let defaults = FilterThresholds::new(f64::NEG_INFINITY, 0, 0, 0.0);
        let controls = filter_controls(&empty, &defaults);

        assert_eq!((controls[0].min, controls[0].max), (0.0, 0.0));
        assert_eq!(controls[0].default_value, 0.0);
    }

    #[test]
    fn test_apply_control() -> Result<()> {
        let base = FilterThresholds::new(12.0, 0, 0, 0.0);

        assert_eq!(apply_control(base, "min-temp", 40.5)?.min_temp, 40.5);
        assert_eq!(apply_control(base, "min-data-points", 30.0)?.min_data_points, 30);
        assert_eq!(apply_control(base, "min-stations", -2.0)?.min_stations, 0);
        assert_eq!(apply_control(base, "min-snow", 20.0)?.min_snow, 20.0);
        assert!(apply_control(base, "max-wind", 1.0).is_err());
        assert!(apply_control(base, "min-temp", f64::NAN).is_err());

        Ok(())
    }

    #[test]
    fn test_apply_control_rejects_negative_snow() {
        let base = FilterThresholds::new(12.0, 0, 0, 0.0);

        let result = apply_control(base, "min-snow", -5.0);
        assert!(matches!(result, Err(ProcessingError::Validation(_))));
    }
}
