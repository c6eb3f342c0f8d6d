use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::{FilterThresholds, RegionAggregate, RegionCatalog, ThresholdBounds};
use crate::presentation::{
    filter_controls, ColorDomain, FilterControl, Legend, ShapeScale, TooltipContent,
};
use crate::processors::FilterSession;

/// Per-region statistics as the front-end reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub code: String,
    pub name: Option<String>,
    pub fips: Option<String>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub sample_count: usize,
    pub station_count: usize,
    pub total_snow: f64,
    pub total_precip: f64,
    pub avg_wind: Option<f64>,
    /// Average temperature's position on the colour scale, `0.0..=1.0`
    pub color_position: Option<f64>,
    pub shape_scale: ShapeScale,
    pub visible: bool,
    pub tooltip: TooltipContent,
}

impl RegionSummary {
    fn new(
        catalog: &RegionCatalog,
        domain: Option<&ColorDomain>,
        code: &str,
        aggregate: &RegionAggregate,
        visible: bool,
    ) -> Self {
        let region = catalog.get(code);
        Self {
            code: code.to_string(),
            name: region.map(|r| r.name.clone()),
            fips: region.and_then(|r| r.fips.clone()),
            min_temp: aggregate.min_temp,
            max_temp: aggregate.max_temp,
            avg_temp: aggregate.avg_temp,
            sample_count: aggregate.sample_count,
            station_count: aggregate.station_count(),
            total_snow: aggregate.total_snow,
            total_precip: aggregate.total_precip,
            avg_wind: aggregate.avg_wind,
            color_position: domain
                .zip(aggregate.avg_temp)
                .map(|(d, avg)| d.normalize(avg)),
            shape_scale: ShapeScale::for_aggregate(aggregate),
            visible,
            tooltip: TooltipContent::for_region(catalog, code, aggregate),
        }
    }
}

/// Everything a map front-end needs to draw and filter the choropleth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDataset {
    pub generated_at: DateTime<Utc>,
    pub regions: Vec<RegionSummary>,
    pub bounds: ThresholdBounds,
    pub default_thresholds: FilterThresholds,
    pub thresholds: FilterThresholds,
    pub color_domain: Option<ColorDomain>,
    pub legend: Option<Legend>,
    pub controls: Vec<FilterControl>,
    pub visible: Vec<String>,
}

impl MapDataset {
    pub fn from_session(catalog: &RegionCatalog, session: &FilterSession<'_>) -> Self {
        let color_domain = ColorDomain::from_aggregates(session.aggregates());
        let regions = session
            .aggregates()
            .iter()
            .map(|(code, aggregate)| {
                RegionSummary::new(
                    catalog,
                    color_domain.as_ref(),
                    code,
                    aggregate,
                    session.is_visible(code),
                )
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            regions,
            bounds: *session.bounds(),
            default_thresholds: *session.defaults(),
            thresholds: *session.thresholds(),
            color_domain,
            legend: color_domain.as_ref().map(Legend::from_domain),
            controls: filter_controls(session.bounds(), session.defaults()),
            visible: session.visible().iter().cloned().collect(),
        }
    }
}

pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn to_string(&self, dataset: &MapDataset) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(dataset)?
        } else {
            serde_json::to_string(dataset)?
        };
        Ok(json)
    }

    /// Write the dataset, creating parent directories as needed
    pub fn write_dataset(&self, dataset: &MapDataset, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = self.to_string(dataset)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        tracing::info!(
            path = %path.display(),
            regions = dataset.regions.len(),
            "Wrote map dataset"
        );
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
