//! Maps a [`QueryResult`] onto exactly one render branch.
//!
//! `render` is pure and is re-run after every observed change of the result
//! slot. Front ends only lay out what it returns.

use crate::{localtime::LocalTime, model::WeatherSnapshot, query::QueryResult};

pub const WELCOME_TITLE: &str = "Welcome to WeatherApp!";
pub const WELCOME_HINT: &str = "Enter a location to get the latest weather updates.";

/// A mutually exclusive rendering path.
#[derive(Debug, Clone, PartialEq)]
pub enum Branch {
    Welcome,
    Spinner,
    Detail(DetailView),
    Error(String),
}

impl Branch {
    pub fn name(&self) -> &'static str {
        match self {
            Branch::Welcome => "welcome",
            Branch::Spinner => "spinner",
            Branch::Detail(_) => "detail",
            Branch::Error(_) => "error",
        }
    }
}

/// Display strings for a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub headline: String,
    pub temperature: String,
    pub icon_url: String,
    pub condition: String,
    pub humidity: String,
    pub precipitation: String,
    pub heat_index: String,
    pub wind_speed: String,
    pub local_time: String,
    pub local_date: String,
}

impl DetailView {
    pub fn from_snapshot(data: &WeatherSnapshot) -> Self {
        let location = &data.location;
        let current = &data.current;
        let lt = LocalTime::split(&location.localtime);

        Self {
            headline: format!("{},{}", location.name, location.country),
            temperature: format!("{}° C", current.temp_c),
            icon_url: icon_url(&current.condition.icon),
            condition: current.condition.text.clone(),
            humidity: current.humidity.to_string(),
            precipitation: format!("{} mm", current.precip_mm),
            heat_index: format!("{}° C", current.heatindex_c),
            wind_speed: format!("{} km/h", current.wind_kph),
            local_time: lt.time.to_string(),
            local_date: lt.date.to_string(),
        }
    }

    /// Label/value cells in display order, two per row.
    pub fn grid(&self) -> [[(&'static str, &str); 2]; 3] {
        [
            [("Humidity", self.humidity.as_str()), ("Precipitation", self.precipitation.as_str())],
            [("Heat Index", self.heat_index.as_str()), ("Wind Speed", self.wind_speed.as_str())],
            [("Local Time", self.local_time.as_str()), ("Local Date", self.local_date.as_str())],
        ]
    }
}

/// Select the branch for `result`.
pub fn render(result: &QueryResult) -> Branch {
    match result {
        QueryResult::Idle => Branch::Welcome,
        QueryResult::Loading => Branch::Spinner,
        QueryResult::Success(data) => Branch::Detail(DetailView::from_snapshot(data)),
        QueryResult::Error(message) => Branch::Error(message.clone()),
    }
}

/// Upstream icons are protocol-relative 64px images; ask for the 128px variant.
fn icon_url(icon: &str) -> String {
    format!("https:{icon}").replace("64x64", "128x128")
}
