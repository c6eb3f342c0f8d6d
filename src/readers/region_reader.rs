use crate::error::{ProcessingError, Result};
use crate::models::{Region, RegionCatalog};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use validator::Validate;

/// Loads a region catalog from a `code,name,fips` file.
pub struct RegionReader;

impl RegionReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_catalog(&self, path: &Path) -> Result<RegionCatalog> {
        let file = File::open(path)?;
        self.read_catalog_from_reader(file)
    }

    pub fn read_catalog_from_reader<R: Read>(&self, reader: R) -> Result<RegionCatalog> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut regions = Vec::new();
        for result in csv_reader.deserialize::<Region>() {
            let mut region = result?;
            region.fips = region.fips.filter(|f| !f.is_empty());
            region.validate()?;
            regions.push(region);
        }

        if regions.is_empty() {
            return Err(ProcessingError::MissingData(
                "region catalog contains no regions".to_string(),
            ));
        }

        tracing::debug!(regions = regions.len(), "Loaded region catalog");
        Ok(RegionCatalog::new(regions))
    }
}

impl Default for RegionReader {
    fn default() -> Self {
        Self::new()
    }
}
