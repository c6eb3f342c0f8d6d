use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "state-weather")]
#[command(about = "Per-state weather aggregation and filtering for choropleth maps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file [default: state-weather.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Hide the progress spinner")]
    pub quiet: bool,
}

#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    #[arg(short, long, help = "Weather CSV file [default: from settings]")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Region catalog CSV (code,name,fips) [default: U.S. states]")]
    pub catalog: Option<PathBuf>,
}

/// Threshold overrides; unset values keep the data-derived defaults
#[derive(Args, Clone, Debug, Default)]
pub struct ThresholdArgs {
    #[arg(long, allow_hyphen_values = true, help = "Minimum average temperature (°F)")]
    pub min_temp: Option<f64>,

    #[arg(long, help = "Minimum number of temperature samples")]
    pub min_data_points: Option<usize>,

    #[arg(long, help = "Minimum number of weather stations")]
    pub min_stations: Option<usize>,

    #[arg(long, help = "Minimum total snowfall (mm)")]
    pub min_snow: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the data and print dataset statistics
    Summary {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, help = "Also print one line per region")]
        regions: bool,
    },

    /// Print the regions passing the given thresholds
    Filter {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        #[arg(long, help = "Print the visible set as JSON")]
        json: bool,
    },

    /// Show tooltip content for a single region
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long, help = "Two-letter region code, e.g. CA")]
        state: String,
    },

    /// Write the map dataset consumed by the front-end
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        #[arg(
            short,
            long,
            help = "Output JSON path [default: {output.directory}/state-weather-{YYMMDD}.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Pretty-print the JSON")]
        pretty: bool,
    },
}
