use crate::error::Result;
use crate::models::{RawWeatherRow, RegionAggregates, RegionCatalog, WeatherRecord};
use crate::processors::{Aggregator, IngestionReport, Ingestor};
use crate::readers::WeatherReader;
use crate::utils::progress::ProgressReporter;
use std::path::Path;

/// Result of one load: validated records and their per-region aggregates.
#[derive(Debug)]
pub struct LoadedDataset {
    pub records: Vec<WeatherRecord>,
    pub aggregates: RegionAggregates,
    pub report: IngestionReport,
}

/// Read → ingest → aggregate, run once at startup.
pub struct WeatherPipeline {
    catalog: RegionCatalog,
    delimiter: u8,
}

impl WeatherPipeline {
    pub fn new(catalog: RegionCatalog) -> Self {
        Self {
            catalog,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn process_file(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<LoadedDataset> {
        if let Some(p) = progress {
            p.set_message(&format!("Reading {}...", path.display()));
        }

        let rows = WeatherReader::with_delimiter(self.delimiter).read_rows(path)?;
        tracing::info!(rows = rows.len(), path = %path.display(), "Loaded weather data");

        Ok(self.process_rows(rows, progress))
    }

    /// Ingest and aggregate rows that are already in memory
    pub fn process_rows(
        &self,
        rows: Vec<RawWeatherRow>,
        progress: Option<&ProgressReporter>,
    ) -> LoadedDataset {
        if let Some(p) = progress {
            p.set_message("Validating records...");
        }
        let (records, report) = Ingestor::new(&self.catalog).ingest_with_report(rows);

        if let Some(p) = progress {
            p.set_message("Aggregating regions...");
        }
        let aggregates = Aggregator::new().aggregate(&records);

        if let Some(p) = progress {
            p.finish_with_message(&format!(
                "Aggregated {} records into {} regions",
                records.len(),
                aggregates.len()
            ));
        }

        LoadedDataset {
            records,
            aggregates,
            report,
        }
    }
}

impl Default for WeatherPipeline {
    fn default() -> Self {
        Self::new(RegionCatalog::us_states())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_process_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "state,station,date,TAVG,TMIN,TMAX,AWND,SNOW,PRCP")?;
        writeln!(temp_file, "VT,S1,2023-02-01,21,12,30,8.5,40,3")?;
        writeln!(temp_file, "VT,S2,2023-02-02,25,15,33,,0,")?;
        writeln!(temp_file, "ZZ,S3,2023-02-02,25,15,33,,0,")?;

        let dataset = WeatherPipeline::default().process_file(temp_file.path(), None)?;

        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.report.unknown_region, 1);
        let vt = &dataset.aggregates["VT"];
        assert_eq!(vt.avg_temp, Some(23.0));
        assert_eq!(vt.total_snow, 40.0);
        assert_eq!(vt.avg_wind, Some(8.5));

        Ok(())
    }

    #[test]
    fn test_tab_delimited() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "state\tTAVG")?;
        writeln!(temp_file, "NH\t28")?;

        let dataset = WeatherPipeline::default()
            .with_delimiter(b'\t')
            .process_file(temp_file.path(), None)?;

        assert_eq!(dataset.aggregates["NH"].sample_count, 1);
        Ok(())
    }
}
