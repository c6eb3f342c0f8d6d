use crate::models::{FilterThresholds, RegionAggregates, ThresholdBounds};
use std::collections::BTreeSet;

/// Region codes currently passing every threshold.
pub type VisibleRegions = BTreeSet<String>;

/// Select the regions whose aggregate satisfies all four thresholds
pub fn evaluate(aggregates: &RegionAggregates, thresholds: &FilterThresholds) -> VisibleRegions {
    aggregates
        .iter()
        .filter(|(_, aggregate)| thresholds.admits(aggregate))
        .map(|(region, _)| region.clone())
        .collect()
}

/// Mutable filter state behind a set of controls.
///
/// Aggregates are borrowed read-only; every threshold change re-selects the
/// visible set synchronously.
pub struct FilterSession<'a> {
    aggregates: &'a RegionAggregates,
    defaults: FilterThresholds,
    bounds: ThresholdBounds,
    thresholds: FilterThresholds,
    visible: VisibleRegions,
}

impl<'a> FilterSession<'a> {
    pub fn new(aggregates: &'a RegionAggregates) -> Self {
        let defaults = FilterThresholds::defaults_for(aggregates);
        let bounds = ThresholdBounds::from_aggregates(aggregates);
        let visible = evaluate(aggregates, &defaults);

        Self {
            aggregates,
            defaults,
            bounds,
            thresholds: defaults,
            visible,
        }
    }

    pub fn aggregates(&self) -> &RegionAggregates {
        self.aggregates
    }

    pub fn defaults(&self) -> &FilterThresholds {
        &self.defaults
    }

    pub fn bounds(&self) -> &ThresholdBounds {
        &self.bounds
    }

    pub fn thresholds(&self) -> &FilterThresholds {
        &self.thresholds
    }

    pub fn visible(&self) -> &VisibleRegions {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, region: &str) -> bool {
        self.visible.contains(region)
    }

    pub fn set_thresholds(&mut self, thresholds: FilterThresholds) -> &VisibleRegions {
        self.thresholds = thresholds;
        self.refresh()
    }

    pub fn set_min_temp(&mut self, min_temp: f64) -> &VisibleRegions {
        self.set_thresholds(self.thresholds.with_min_temp(min_temp))
    }

    pub fn set_min_data_points(&mut self, min_data_points: usize) -> &VisibleRegions {
        self.set_thresholds(self.thresholds.with_min_data_points(min_data_points))
    }

    pub fn set_min_stations(&mut self, min_stations: usize) -> &VisibleRegions {
        self.set_thresholds(self.thresholds.with_min_stations(min_stations))
    }

    pub fn set_min_snow(&mut self, min_snow: f64) -> &VisibleRegions {
        self.set_thresholds(self.thresholds.with_min_snow(min_snow))
    }

    /// Restore the thresholds derived when the session was created
    pub fn reset(&mut self) -> &VisibleRegions {
        self.set_thresholds(self.defaults)
    }

    fn refresh(&mut self) -> &VisibleRegions {
        self.visible = evaluate(self.aggregates, &self.thresholds);
        tracing::debug!(
            min_temp = self.thresholds.min_temp,
            min_data_points = self.thresholds.min_data_points,
            min_stations = self.thresholds.min_stations,
            min_snow = self.thresholds.min_snow,
            visible = self.visible.len(),
            "Re-evaluated filters"
        );
        &self.visible
    }
}
