use crate::analyzers::RegionAnalyzer;
use crate::cli::args::{Cli, Commands, InputArgs, ThresholdArgs};
use crate::cli::logging::init_logging;
use crate::config::AppConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{FilterThresholds, RegionCatalog};
use crate::presentation::TooltipContent;
use crate::processors::{FilterSession, LoadedDataset, WeatherPipeline};
use crate::readers::RegionReader;
use crate::utils::filename::generate_default_export_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{JsonWriter, MapDataset};
use validator::Validate;

pub fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging.level, cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Summary { input, regions } => {
            let (pipeline, dataset) = load_dataset(&config, &input, cli.quiet)?;

            println!("{}", dataset.report.summary());

            let analyzer = RegionAnalyzer::new();
            let stats = analyzer.analyze(&dataset.records, &dataset.aggregates);
            println!("\n{}", stats.detailed_summary());

            if regions {
                println!(
                    "\n{}",
                    analyzer.region_table(pipeline.catalog(), &dataset.aggregates)
                );
            }
        }

        Commands::Filter {
            input,
            thresholds,
            json,
        } => {
            let (pipeline, dataset) = load_dataset(&config, &input, cli.quiet)?;
            let mut session = FilterSession::new(&dataset.aggregates);
            session.set_thresholds(resolve_thresholds(session.defaults(), &thresholds)?);

            if json {
                println!("{}", serde_json::to_string(session.visible())?);
                return Ok(());
            }

            let applied = session.thresholds();
            println!(
                "Thresholds: avg temp >= {}, data points >= {}, stations >= {}, snow >= {} mm",
                applied.min_temp, applied.min_data_points, applied.min_stations, applied.min_snow
            );
            println!("Showing {} states", session.visible_count());
            for code in session.visible() {
                println!(
                    "  {} {}",
                    code,
                    pipeline.catalog().display_name(code).unwrap_or_default()
                );
            }
        }

        Commands::Inspect { input, state } => {
            let (pipeline, dataset) = load_dataset(&config, &input, cli.quiet)?;
            let code = state.trim().to_uppercase();

            if !pipeline.catalog().contains(&code) {
                return Err(ProcessingError::UnknownRegion { code });
            }

            match dataset.aggregates.get(&code) {
                Some(aggregate) => {
                    let tooltip = TooltipContent::for_region(pipeline.catalog(), &code, aggregate);
                    println!("{}", tooltip.render_text());

                    let session = FilterSession::new(&dataset.aggregates);
                    let shown = if session.is_visible(&code) {
                        "shown"
                    } else {
                        "hidden"
                    };
                    println!("\nWith default filters this region is {}", shown);
                }
                None => println!("No accepted records for {}", code),
            }
        }

        Commands::Export {
            input,
            thresholds,
            output_file,
            pretty,
        } => {
            let (pipeline, dataset) = load_dataset(&config, &input, cli.quiet)?;
            let mut session = FilterSession::new(&dataset.aggregates);
            session.set_thresholds(resolve_thresholds(session.defaults(), &thresholds)?);

            let output_file = output_file
                .unwrap_or_else(|| generate_default_export_filename(&config.output.directory));

            let map_dataset = MapDataset::from_session(pipeline.catalog(), &session);
            JsonWriter::new()
                .with_pretty(pretty || config.output.pretty)
                .write_dataset(&map_dataset, &output_file)?;

            println!(
                "Wrote {} regions ({} visible) to {}",
                map_dataset.regions.len(),
                map_dataset.visible.len(),
                output_file.display()
            );
        }
    }

    Ok(())
}

fn load_catalog(config: &AppConfig, input: &InputArgs) -> Result<RegionCatalog> {
    match input.catalog.as_ref().or(config.data.catalog_csv.as_ref()) {
        Some(path) => RegionReader::new().read_catalog(path),
        None => Ok(RegionCatalog::us_states()),
    }
}

fn load_dataset(
    config: &AppConfig,
    input: &InputArgs,
    quiet: bool,
) -> Result<(WeatherPipeline, LoadedDataset)> {
    let catalog = load_catalog(config, input)?;
    let path = input
        .input
        .clone()
        .unwrap_or_else(|| config.data.weather_csv.clone());

    let pipeline = WeatherPipeline::new(catalog).with_delimiter(config.delimiter_byte()?);
    let progress = ProgressReporter::new_spinner("Loading weather data...", quiet);
    let dataset = pipeline.process_file(&path, Some(&progress))?;

    Ok((pipeline, dataset))
}

/// Overlay command-line thresholds on the defaults and validate the result
fn resolve_thresholds(
    defaults: &FilterThresholds,
    overrides: &ThresholdArgs,
) -> Result<FilterThresholds> {
    let mut thresholds = *defaults;
    if let Some(min_temp) = overrides.min_temp {
        thresholds = thresholds.with_min_temp(min_temp);
    }
    if let Some(min_data_points) = overrides.min_data_points {
        thresholds = thresholds.with_min_data_points(min_data_points);
    }
    if let Some(min_stations) = overrides.min_stations {
        thresholds = thresholds.with_min_stations(min_stations);
    }
    if let Some(min_snow) = overrides.min_snow {
        thresholds = thresholds.with_min_snow(min_snow);
    }

    thresholds.validate()?;
    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_thresholds_keeps_unset_defaults() -> Result<()> {
        let defaults = FilterThresholds::new(18.0, 0, 0, 0.0);
        let overrides = ThresholdArgs {
            min_stations: Some(4),
            ..ThresholdArgs::default()
        };

        let resolved = resolve_thresholds(&defaults, &overrides)?;

        assert_eq!(resolved, FilterThresholds::new(18.0, 0, 4, 0.0));
        Ok(())
    }

    #[test]
    fn test_resolve_thresholds_rejects_negative_snow() {
        let overrides = ThresholdArgs {
            min_snow: Some(-10.0),
            ..ThresholdArgs::default()
        };

        let result = resolve_thresholds(&FilterThresholds::new(0.0, 0, 0, 0.0), &overrides);
        assert!(matches!(result, Err(ProcessingError::Validation(_))));
    }
}
