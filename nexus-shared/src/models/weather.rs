use serde::{Deserialize, Serialize};

/// Snapshot of current conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_f: i32,
    pub feels_like_f: i32,
    /// Relative humidity percentage.
    pub humidity: u32,
    pub wind_mph: u32,
    pub uv_index: u32,
    pub condition: String,
    /// Emoji glyph for the condition.
    pub icon: String,
}

/// One row of the daily forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day: String,
    pub high_f: i32,
    pub low_f: i32,
    pub icon: String,
    pub condition: String,
    /// Chance of precipitation, percentage.
    pub precipitation: u32,
}

/// One row of the hourly forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: String,
    pub temp_f: i32,
    pub icon: String,
    /// Chance of precipitation, percentage.
    pub precipitation: u32,
}

/// Full report returned by the weather capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
    pub hourly: Vec<HourlyForecast>,
}
