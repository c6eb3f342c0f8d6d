use crate::error::{ProcessingError, Result};
use crate::models::RawWeatherRow;
use crate::utils::constants::REQUIRED_COLUMNS;
use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;

pub struct WeatherReader {
    delimiter: u8,
}

impl WeatherReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read every row of a delimited weather file
    pub fn read_rows(&self, path: &Path) -> Result<Vec<RawWeatherRow>> {
        let bytes = fs::read(path)?;
        self.read_rows_from_bytes(&bytes)
    }

    /// Read rows from raw bytes, decoding non-UTF-8 input as Windows-1252
    pub fn read_rows_from_bytes(&self, bytes: &[u8]) -> Result<Vec<RawWeatherRow>> {
        let text = decode_text(bytes);
        self.read_rows_from_reader(text.as_bytes())
    }

    pub fn read_rows_from_reader<R: Read>(&self, reader: R) -> Result<Vec<RawWeatherRow>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                tracing::warn!(column, "Column missing from weather data, treating as absent");
            }
        }

        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for (index, result) in csv_reader.deserialize::<RawWeatherRow>().enumerate() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(ProcessingError::Csv(e));
                }
                Err(e) => {
                    skipped += 1;
                    // Line 1 is the header
                    tracing::warn!(line = index + 2, error = %e, "Skipping unreadable row");
                }
            }
        }

        tracing::debug!(rows = rows.len(), skipped, "Read weather rows");
        Ok(rows)
    }
}

impl Default for WeatherReader {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        return encoding
            .decode_without_bom_handling(&bytes[bom_length..])
            .0;
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::warn!("Weather data is not valid UTF-8, decoding as Windows-1252");
            WINDOWS_1252.decode_without_bom_handling(bytes).0
        }
    }
}
