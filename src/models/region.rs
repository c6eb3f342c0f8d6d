use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Two-letter code, display name and FIPS code for the fifty states plus DC.
const US_STATES: [(&str, &str, &str); 51] = [
    ("AL", "Alabama", "01"),
    ("AK", "Alaska", "02"),
    ("AZ", "Arizona", "04"),
    ("AR", "Arkansas", "05"),
    ("CA", "California", "06"),
    ("CO", "Colorado", "08"),
    ("CT", "Connecticut", "09"),
    ("DE", "Delaware", "10"),
    ("DC", "District of Columbia", "11"),
    ("FL", "Florida", "12"),
    ("GA", "Georgia", "13"),
    ("HI", "Hawaii", "15"),
    ("ID", "Idaho", "16"),
    ("IL", "Illinois", "17"),
    ("IN", "Indiana", "18"),
    ("IA", "Iowa", "19"),
    ("KS", "Kansas", "20"),
    ("KY", "Kentucky", "21"),
    ("LA", "Louisiana", "22"),
    ("ME", "Maine", "23"),
    ("MD", "Maryland", "24"),
    ("MA", "Massachusetts", "25"),
    ("MI", "Michigan", "26"),
    ("MN", "Minnesota", "27"),
    ("MS", "Mississippi", "28"),
    ("MO", "Missouri", "29"),
    ("MT", "Montana", "30"),
    ("NE", "Nebraska", "31"),
    ("NV", "Nevada", "32"),
    ("NH", "New Hampshire", "33"),
    ("NJ", "New Jersey", "34"),
    ("NM", "New Mexico", "35"),
    ("NY", "New York", "36"),
    ("NC", "North Carolina", "37"),
    ("ND", "North Dakota", "38"),
    ("OH", "Ohio", "39"),
    ("OK", "Oklahoma", "40"),
    ("OR", "Oregon", "41"),
    ("PA", "Pennsylvania", "42"),
    ("RI", "Rhode Island", "44"),
    ("SC", "South Carolina", "45"),
    ("SD", "South Dakota", "46"),
    ("TN", "Tennessee", "47"),
    ("TX", "Texas", "48"),
    ("UT", "Utah", "49"),
    ("VT", "Vermont", "50"),
    ("VA", "Virginia", "51"),
    ("WA", "Washington", "53"),
    ("WV", "West Virginia", "54"),
    ("WI", "Wisconsin", "55"),
    ("WY", "Wyoming", "56"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Region {
    #[validate(length(min = 1))]
    pub code: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[serde(default)]
    pub fips: Option<String>,
}

impl Region {
    pub fn new(code: String, name: String, fips: Option<String>) -> Self {
        Self { code, name, fips }
    }
}

/// The set of region codes a record may belong to, with their display names.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: BTreeMap<String, Region>,
}

impl RegionCatalog {
    pub fn new(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            regions: regions
                .into_iter()
                .map(|region| (region.code.clone(), region))
                .collect(),
        }
    }

    /// Built-in catalog of the fifty U.S. states and the District of Columbia
    pub fn us_states() -> Self {
        Self::new(US_STATES.iter().map(|(code, name, fips)| {
            Region::new(code.to_string(), name.to_string(), Some(fips.to_string()))
        }))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.regions.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&Region> {
        self.regions.get(code)
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.regions.get(code).map(|r| r.name.as_str())
    }

    /// Resolve a map-shape FIPS id (`"6"` or `"06"`) to a region code.
    pub fn code_for_fips(&self, fips: &str) -> Option<&str> {
        let fips = fips.trim();
        let padded = if fips.len() == 1 {
            format!("0{}", fips)
        } else {
            fips.to_string()
        };

        self.regions
            .values()
            .find(|r| r.fips.as_deref() == Some(padded.as_str()))
            .map(|r| r.code.as_str())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_states_catalog() {
        let catalog = RegionCatalog::us_states();

        assert_eq!(catalog.len(), 51);
        assert!(catalog.contains("CA"));
        assert!(catalog.contains("DC"));
        assert!(!catalog.contains("PR"));
        assert!(!catalog.contains("ca"));
        assert_eq!(catalog.display_name("NY"), Some("New York"));
        assert_eq!(catalog.display_name("XX"), None);
    }

    #[test]
    fn test_code_for_fips() {
        let catalog = RegionCatalog::us_states();

        assert_eq!(catalog.code_for_fips("06"), Some("CA"));
        assert_eq!(catalog.code_for_fips("6"), Some("CA"));
        assert_eq!(catalog.code_for_fips("11"), Some("DC"));
        assert_eq!(catalog.code_for_fips("03"), None);
    }

    #[test]
    fn test_region_validation() {
        let region = Region::new("".to_string(), "Nowhere".to_string(), None);
        assert!(region.validate().is_err());

        let region = Region::new("GU".to_string(), "Guam".to_string(), Some("66".to_string()));
        assert!(region.validate().is_ok());
    }
}
