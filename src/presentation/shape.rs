use serde::{Deserialize, Serialize};

use crate::models::RegionAggregate;

/// Factor a region's outline is scaled by around its centroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeScale(pub f64);

impl ShapeScale {
    /// `sqrt(avg_temp) / 10`; unscaled when there is no positive average
    pub fn for_aggregate(aggregate: &RegionAggregate) -> Self {
        match aggregate.avg_temp {
            Some(avg) if avg > 0.0 => Self(avg.sqrt() / 10.0),
            _ => Self(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegionAccumulator, WeatherRecord};

    fn with_average(avg: Option<f64>) -> RegionAggregate {
        let mut acc = RegionAccumulator::new();
        let mut builder = WeatherRecord::builder().region("AZ");
        if let Some(avg) = avg {
            builder = builder.temp_avg(avg);
        }
        acc.observe(&builder.build().unwrap());
        acc.finish()
    }

    #[test]
    fn test_scale_follows_average() {
        assert_eq!(ShapeScale::for_aggregate(&with_average(Some(81.0))), ShapeScale(0.9));
        assert_eq!(ShapeScale::for_aggregate(&with_average(Some(100.0))), ShapeScale(1.0));
    }

    #[test]
    fn test_unscaled_without_positive_average() {
        assert_eq!(ShapeScale::for_aggregate(&with_average(None)), ShapeScale(1.0));
        assert_eq!(ShapeScale::for_aggregate(&with_average(Some(-12.0))), ShapeScale(1.0));
    }
}
