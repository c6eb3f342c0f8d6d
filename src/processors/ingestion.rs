use crate::models::{RawWeatherRow, RegionCatalog, WeatherRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionReport {
    pub rows_seen: usize,
    pub rows_accepted: usize,
    pub missing_region: usize,
    pub unknown_region: usize,
}

impl IngestionReport {
    pub fn rows_dropped(&self) -> usize {
        self.missing_region + self.unknown_region
    }

    pub fn summary(&self) -> String {
        format!(
            "Rows: {} read, {} accepted, {} dropped ({} without region, {} outside catalog)",
            self.rows_seen,
            self.rows_accepted,
            self.rows_dropped(),
            self.missing_region,
            self.unknown_region
        )
    }
}

/// Turns raw string rows into typed records for catalogued regions.
pub struct Ingestor<'a> {
    catalog: &'a RegionCatalog,
}

impl<'a> Ingestor<'a> {
    pub fn new(catalog: &'a RegionCatalog) -> Self {
        Self { catalog }
    }

    pub fn ingest<I>(&self, rows: I) -> Vec<WeatherRecord>
    where
        I: IntoIterator<Item = RawWeatherRow>,
    {
        self.ingest_with_report(rows).0
    }

    /// Validate rows, keeping only those whose region is in the catalog
    pub fn ingest_with_report<I>(&self, rows: I) -> (Vec<WeatherRecord>, IngestionReport)
    where
        I: IntoIterator<Item = RawWeatherRow>,
    {
        let mut report = IngestionReport::default();
        let mut records = Vec::new();

        for row in rows {
            report.rows_seen += 1;

            let region = match row.state.as_deref() {
                None | Some("") => {
                    report.missing_region += 1;
                    continue;
                }
                Some(code) if !self.catalog.contains(code) => {
                    report.unknown_region += 1;
                    tracing::trace!(region = code, "Dropping row outside catalog");
                    continue;
                }
                Some(code) => code.to_string(),
            };

            records.push(self.convert_row(region, row));
        }

        report.rows_accepted = records.len();
        tracing::debug!(
            seen = report.rows_seen,
            accepted = report.rows_accepted,
            dropped = report.rows_dropped(),
            "Ingested weather rows"
        );

        (records, report)
    }

    fn convert_row(&self, region: String, row: RawWeatherRow) -> WeatherRecord {
        WeatherRecord {
            region,
            station: row
                .station
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            date: row.date.filter(|d| !d.trim().is_empty()),
            temp_avg: coerce_observation(row.tavg.as_deref()),
            temp_min: coerce_observation(row.tmin.as_deref()),
            temp_max: coerce_observation(row.tmax.as_deref()),
            wind_speed: coerce_observation(row.awnd.as_deref()),
            snowfall: coerce_observation(row.snow.as_deref()),
            precipitation: coerce_observation(row.prcp.as_deref()),
        }
    }
}

/// Ingest with a one-off [`Ingestor`]
pub fn ingest<I>(rows: I, catalog: &RegionCatalog) -> Vec<WeatherRecord>
where
    I: IntoIterator<Item = RawWeatherRow>,
{
    Ingestor::new(catalog).ingest(rows)
}

/// Coerce a raw field to an observation.
///
/// Empty, unparsable, non-finite and zero values are all absent. Zero is
/// indistinguishable from a missing reading in the source data, so a genuine
/// `0` snowfall never contributes to a total.
pub fn coerce_observation(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(state: &str, tavg: &str) -> RawWeatherRow {
        RawWeatherRow {
            state: Some(state.to_string()),
            tavg: Some(tavg.to_string()),
            ..RawWeatherRow::default()
        }
    }

    #[test]
    fn test_unknown_regions_dropped() {
        let catalog = RegionCatalog::us_states();
        let rows = vec![
            row("CA", "70"),
            row("PR", "81"),
            row("ca", "70"),
            row("TX", "90"),
            RawWeatherRow::default(),
        ];

        let (records, report) = Ingestor::new(&catalog).ingest_with_report(rows);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region, "CA");
        assert_eq!(records[1].region, "TX");
        assert_eq!(
            report,
            IngestionReport {
                rows_seen: 5,
                rows_accepted: 2,
                missing_region: 1,
                unknown_region: 2,
            }
        );
        assert_eq!(report.rows_dropped(), 3);
    }

    #[test]
    fn test_coerce_observation() {
        assert_eq!(coerce_observation(Some("42.5")), Some(42.5));
        assert_eq!(coerce_observation(Some(" -3 ")), Some(-3.0));
        assert_eq!(coerce_observation(Some("1e2")), Some(100.0));
        assert_eq!(coerce_observation(Some("")), None);
        assert_eq!(coerce_observation(Some("abc")), None);
        assert_eq!(coerce_observation(Some("NaN")), None);
        assert_eq!(coerce_observation(Some("inf")), None);
        assert_eq!(coerce_observation(None), None);
    }

    #[test]
    fn test_zero_reading_is_absent() {
        // Known quirk: a true zero cannot be told apart from a missing value
        assert_eq!(coerce_observation(Some("0")), None);
        assert_eq!(coerce_observation(Some("0.0")), None);
        assert_eq!(coerce_observation(Some("-0")), None);
    }

    #[test]
    fn test_row_conversion() {
        let catalog = RegionCatalog::us_states();
        let raw = RawWeatherRow {
            state: Some("CO".to_string()),
            tavg: Some("31.5".to_string()),
            tmin: Some("x".to_string()),
            tmax: Some("44".to_string()),
            awnd: Some("7.2".to_string()),
            snow: Some("0".to_string()),
            prcp: Some("2.1".to_string()),
            station: Some("  ".to_string()),
            date: Some("2023-01-04".to_string()),
        };

        let records = ingest(vec![raw], &catalog);

        assert_eq!(
            records,
            vec![WeatherRecord {
                region: "CO".to_string(),
                station: None,
                date: Some("2023-01-04".to_string()),
                temp_avg: Some(31.5),
                temp_min: None,
                temp_max: Some(44.0),
                wind_speed: Some(7.2),
                snowfall: None,
                precipitation: Some(2.1),
            }]
        );
    }
}
