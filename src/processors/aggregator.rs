use crate::models::{RegionAccumulator, RegionAggregates, WeatherRecord};
use std::collections::BTreeMap;

/// Partial per-region state, before the means are taken.
pub type PartialAggregates = BTreeMap<String, RegionAccumulator>;

pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// Fold records into one aggregate per region, in input order
    pub fn aggregate(&self, records: &[WeatherRecord]) -> RegionAggregates {
        let aggregates = self.finish(self.accumulate(records));
        tracing::debug!(
            records = records.len(),
            regions = aggregates.len(),
            "Aggregated weather records"
        );
        aggregates
    }

    pub fn accumulate(&self, records: &[WeatherRecord]) -> PartialAggregates {
        records
            .iter()
            .fold(PartialAggregates::new(), |mut partials, record| {
                partials
                    .entry(record.region.clone())
                    .or_default()
                    .observe(record);
                partials
            })
    }

    /// Merge two partial results; `right`'s samples follow `left`'s
    pub fn merge(&self, left: PartialAggregates, right: PartialAggregates) -> PartialAggregates {
        right.into_iter().fold(left, |mut merged, (region, partial)| {
            let combined = match merged.remove(&region) {
                Some(existing) => existing.merge(partial),
                None => partial,
            };
            merged.insert(region, combined);
            merged
        })
    }

    pub fn finish(&self, partials: PartialAggregates) -> RegionAggregates {
        partials
            .into_iter()
            .map(|(region, partial)| (region, partial.finish()))
            .collect()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate with a one-off [`Aggregator`]
pub fn aggregate(records: &[WeatherRecord]) -> RegionAggregates {
    Aggregator::new().aggregate(records)
}
