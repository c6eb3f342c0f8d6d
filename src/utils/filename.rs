use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Default export filename: `state-weather-{YYMMDD}.json` inside `directory`
pub fn generate_default_export_filename(directory: &Path) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100;

    let filename = format!(
        "state-weather-{:02}{:02}{:02}.json",
        year,
        now.month(),
        now.day()
    );
    directory.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_export_filename() {
        let filename = generate_default_export_filename(Path::new("output"));
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/state-weather-"));
        assert!(filename_str.ends_with(".json"));

        let file_part = filename.file_name().unwrap().to_string_lossy().to_string();
        // state-weather- + YYMMDD + .json
        assert_eq!(file_part.len(), "state-weather-".len() + 6 + ".json".len());
    }
}
