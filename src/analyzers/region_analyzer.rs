use crate::models::{RegionAggregates, RegionCatalog, WeatherRecord};
use crate::utils::constants::{NOT_AVAILABLE, TEMP_UNIT};
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug)]
pub struct DatasetStatistics {
    pub total_records: usize,
    pub regions: usize,
    pub unique_stations: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub temperature_stats: TemperatureStats,
    pub total_snow: f64,
    pub total_precip: f64,
    pub regions_without_temperature: Vec<String>,
}

#[derive(Debug, Default)]
pub struct TemperatureStats {
    pub min_temp: Option<(f64, String)>,
    pub max_temp: Option<(f64, String)>,
    pub coldest_region: Option<(f64, String)>,
    pub warmest_region: Option<(f64, String)>,
}

pub struct RegionAnalyzer;

impl RegionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        records: &[WeatherRecord],
        aggregates: &RegionAggregates,
    ) -> DatasetStatistics {
        let mut date_range: Option<(NaiveDate, NaiveDate)> = None;
        for date in records.iter().filter_map(WeatherRecord::parsed_date) {
            date_range = Some(match date_range {
                Some((first, last)) => (first.min(date), last.max(date)),
                None => (date, date),
            });
        }

        let mut stations = BTreeSet::new();
        let mut stats = TemperatureStats::default();
        let mut total_snow = 0.0;
        let mut total_precip = 0.0;
        let mut regions_without_temperature = Vec::new();

        for (region, aggregate) in aggregates {
            stations.extend(aggregate.stations.iter().map(String::as_str));
            total_snow += aggregate.total_snow;
            total_precip += aggregate.total_precip;

            if let Some(min) = aggregate.min_temp {
                if stats.min_temp.as_ref().map_or(true, |(t, _)| min < *t) {
                    stats.min_temp = Some((min, region.clone()));
                }
            }
            if let Some(max) = aggregate.max_temp {
                if stats.max_temp.as_ref().map_or(true, |(t, _)| max > *t) {
                    stats.max_temp = Some((max, region.clone()));
                }
            }

            match aggregate.avg_temp {
                Some(avg) => {
                    if stats.coldest_region.as_ref().map_or(true, |(t, _)| avg < *t) {
                        stats.coldest_region = Some((avg, region.clone()));
                    }
                    if stats.warmest_region.as_ref().map_or(true, |(t, _)| avg > *t) {
                        stats.warmest_region = Some((avg, region.clone()));
                    }
                }
                None => regions_without_temperature.push(region.clone()),
            }
        }

        DatasetStatistics {
            total_records: records.len(),
            regions: aggregates.len(),
            unique_stations: stations.len(),
            date_range,
            temperature_stats: stats,
            total_snow,
            total_precip,
            regions_without_temperature,
        }
    }

    /// One line per region, in code order
    pub fn region_table(&self, catalog: &RegionCatalog, aggregates: &RegionAggregates) -> String {
        let mut table = String::new();
        table.push_str(&format!(
            "{:<4} {:<22} {:>9} {:>8} {:>8} {:>8} {:>10} {:>10}\n",
            "Code", "Name", "Avg Temp", "Samples", "Stations", "Wind", "Snow", "Precip"
        ));

        for (code, aggregate) in aggregates {
            table.push_str(&format!(
                "{:<4} {:<22} {:>9} {:>8} {:>8} {:>8} {:>10.1} {:>10.1}\n",
                code,
                catalog.display_name(code).unwrap_or(code),
                aggregate
                    .avg_temp
                    .map(|t| format!("{:.1}", t))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                aggregate.sample_count,
                aggregate.station_count(),
                aggregate
                    .avg_wind
                    .map(|w| format!("{:.1}", w))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                aggregate.total_snow,
                aggregate.total_precip,
            ));
        }

        table
    }
}

impl Default for RegionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(value: &Option<(f64, String)>) -> String {
    match value {
        Some((t, region)) => format!("{:.1}{} in {}", t, TEMP_UNIT, region),
        None => "No valid measurements".to_string(),
    }
}

impl DatasetStatistics {
    pub fn summary(&self) -> String {
        let dates = match self.date_range {
            Some((first, last)) => format!("{} to {}", first, last),
            None => "Unknown".to_string(),
        };

        format!(
            "Regions: {} ({} without temperature averages)\n\
            Stations: {} stations\n\
            Date Range: {}\n\
            Records: {} accepted\n\
            Total Snow: {:.1} mm\n\
            Total Precip: {:.1} mm",
            self.regions,
            self.regions_without_temperature.len(),
            self.unique_stations,
            dates,
            self.total_records,
            self.total_snow,
            self.total_precip
        )
    }

    pub fn detailed_summary(&self) -> String {
        format!(
            "{}\n\n\
            Extreme Temperatures:\n\
            - Coldest reading: {}\n\
            - Hottest reading: {}\n\
            - Coldest region (average): {}\n\
            - Warmest region (average): {}",
            self.summary(),
            describe(&self.temperature_stats.min_temp),
            describe(&self.temperature_stats.max_temp),
            describe(&self.temperature_stats.coldest_region),
            describe(&self.temperature_stats.warmest_region)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::aggregate;

    fn records() -> Vec<WeatherRecord> {
        vec![
            WeatherRecord::builder()
                .region("MT")
                .station("A")
                .date("2023-01-02")
                .temperatures(-12.0, 10.0, 25.0)
                .snowfall(40.0)
                .build()
                .unwrap(),
            WeatherRecord::builder()
                .region("AZ")
                .station("B")
                .date("2023-01-09")
                .temperatures(45.0, 62.0, 77.0)
                .precipitation(1.5)
                .build()
                .unwrap(),
            WeatherRecord::builder()
                .region("AK")
                .station("A")
                .date("not a date")
                .snowfall(60.0)
                .build()
                .unwrap(),
        ]
    }

    #[test]
    fn test_dataset_statistics() {
        let records = records();
        let aggregates = aggregate(&records);
        let stats = RegionAnalyzer::new().analyze(&records, &aggregates);

        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.regions, 3);
        assert_eq!(stats.unique_stations, 2);
        assert_eq!(
            stats.date_range,
            Some((
                NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 9).unwrap()
            ))
        );
        assert_eq!(stats.temperature_stats.min_temp, Some((-12.0, "MT".to_string())));
        assert_eq!(stats.temperature_stats.max_temp, Some((77.0, "AZ".to_string())));
        assert_eq!(stats.temperature_stats.warmest_region, Some((62.0, "AZ".to_string())));
        assert_eq!(stats.regions_without_temperature, vec!["AK".to_string()]);
        assert_eq!(stats.total_snow, 100.0);

        let summary = stats.detailed_summary();
        assert!(summary.contains("2023-01-02 to 2023-01-09"));
        assert!(summary.contains("Coldest region (average): 10.0°F in MT"));
    }

    #[test]
    fn test_empty_dataset_summarises() {
        let stats = RegionAnalyzer::new().analyze(&[], &RegionAggregates::new());

        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.regions, 0);
        assert_eq!(stats.date_range, None);

        let summary = stats.detailed_summary();
        assert!(summary.contains("Records: 0 accepted"));
        assert!(summary.contains("Date Range: Unknown"));
        assert!(summary.contains("Coldest reading: No valid measurements"));
    }

    #[test]
    fn test_region_table() {
        let records = records();
        let aggregates = aggregate(&records);
        let table = RegionAnalyzer::new().region_table(&RegionCatalog::us_states(), &aggregates);

        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("Montana"));
        assert!(table.lines().any(|l| l.starts_with("AK") && l.contains("N/A")));
    }
}
