use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};

/// One row of the source table, every column still a string.
///
/// Columns missing from the header deserialize as `None`; unknown columns
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeatherRow {
    #[serde(default)]
    pub state: Option<String>,

    #[serde(rename = "TAVG", default)]
    pub tavg: Option<String>,

    #[serde(rename = "TMIN", default)]
    pub tmin: Option<String>,

    #[serde(rename = "TMAX", default)]
    pub tmax: Option<String>,

    #[serde(rename = "AWND", default)]
    pub awnd: Option<String>,

    #[serde(rename = "SNOW", default)]
    pub snow: Option<String>,

    #[serde(rename = "PRCP", default)]
    pub prcp: Option<String>,

    #[serde(default)]
    pub station: Option<String>,

    #[serde(default)]
    pub date: Option<String>,
}

/// A validated station-day observation for a catalogued region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub region: String,
    pub station: Option<String>,
    pub date: Option<String>,

    // Optional observations (°F, mph, mm)
    pub temp_avg: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub wind_speed: Option<f64>,
    pub snowfall: Option<f64>,
    pub precipitation: Option<f64>,
}

impl WeatherRecord {
    pub fn builder() -> WeatherRecordBuilder {
        WeatherRecordBuilder::new()
    }

    /// Date as a calendar day, when it is in ISO `YYYY-MM-DD` form
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
    }
}

#[derive(Debug, Default)]
pub struct WeatherRecordBuilder {
    region: Option<String>,
    station: Option<String>,
    date: Option<String>,
    temp_avg: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    wind_speed: Option<f64>,
    snowfall: Option<f64>,
    precipitation: Option<f64>,
}

impl WeatherRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, code: &str) -> Self {
        self.region = Some(code.to_string());
        self
    }

    pub fn station(mut self, id: &str) -> Self {
        self.station = Some(id.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn temperatures(mut self, min: f64, avg: f64, max: f64) -> Self {
        self.temp_min = Some(min);
        self.temp_avg = Some(avg);
        self.temp_max = Some(max);
        self
    }

    pub fn temp_avg(mut self, temp: f64) -> Self {
        self.temp_avg = Some(temp);
        self
    }

    pub fn temp_min(mut self, temp: f64) -> Self {
        self.temp_min = Some(temp);
        self
    }

    pub fn temp_max(mut self, temp: f64) -> Self {
        self.temp_max = Some(temp);
        self
    }

    pub fn wind_speed(mut self, speed: f64) -> Self {
        self.wind_speed = Some(speed);
        self
    }

    pub fn snowfall(mut self, snow: f64) -> Self {
        self.snowfall = Some(snow);
        self
    }

    pub fn precipitation(mut self, precip: f64) -> Self {
        self.precipitation = Some(precip);
        self
    }

    pub fn build(self) -> Result<WeatherRecord> {
        Ok(WeatherRecord {
            region: self
                .region
                .ok_or_else(|| ProcessingError::MissingData("region".to_string()))?,
            station: self.station,
            date: self.date,
            temp_avg: self.temp_avg,
            temp_min: self.temp_min,
            temp_max: self.temp_max,
            wind_speed: self.wind_speed,
            snowfall: self.snowfall,
            precipitation: self.precipitation,
        })
    }
}
