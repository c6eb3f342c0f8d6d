pub mod region_reader;
pub mod weather_reader;

pub use region_reader::RegionReader;
pub use weather_reader::WeatherReader;
