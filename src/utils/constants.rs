/// Source column names
pub const COLUMN_STATE: &str = "state";
pub const COLUMN_TAVG: &str = "TAVG";
pub const COLUMN_TMIN: &str = "TMIN";
pub const COLUMN_TMAX: &str = "TMAX";
pub const COLUMN_AWND: &str = "AWND";
pub const COLUMN_SNOW: &str = "SNOW";
pub const COLUMN_PRCP: &str = "PRCP";
pub const COLUMN_STATION: &str = "station";
pub const COLUMN_DATE: &str = "date";

pub const REQUIRED_COLUMNS: [&str; 9] = [
    COLUMN_STATE,
    COLUMN_TAVG,
    COLUMN_TMIN,
    COLUMN_TMAX,
    COLUMN_AWND,
    COLUMN_SNOW,
    COLUMN_PRCP,
    COLUMN_STATION,
    COLUMN_DATE,
];

/// File names
pub const DEFAULT_WEATHER_FILE: &str = "data/weather.csv";
pub const DEFAULT_CONFIG_FILE: &str = "state-weather.toml";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "STATE_WEATHER";

/// Filter control identifiers
pub const CONTROL_MIN_TEMP: &str = "min-temp";
pub const CONTROL_MIN_DATA_POINTS: &str = "min-data-points";
pub const CONTROL_MIN_STATIONS: &str = "min-stations";
pub const CONTROL_MIN_SNOW: &str = "min-snow";

/// Filter control slider steps
pub const TEMP_STEP: f64 = 0.5;
pub const DATA_POINTS_STEP: f64 = 10.0;
pub const STATIONS_STEP: f64 = 1.0;
pub const SNOW_STEP: f64 = 10.0;

/// Display units
pub const TEMP_UNIT: &str = "°F";
pub const WIND_UNIT: &str = "mph";
pub const DEPTH_UNIT: &str = "mm";
pub const NOT_AVAILABLE: &str = "N/A";

/// Colour legend layout
pub const LEGEND_TITLE: &str = "Average Temperature (°F)";
pub const LEGEND_STOP_COUNT: usize = 11;
pub const LEGEND_TICK_COUNT: usize = 3;
