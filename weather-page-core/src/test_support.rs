use crate::model::{Condition, Current, Location, Measure, WeatherSnapshot};

pub(crate) fn snapshot(name: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location: Location {
            name: name.to_string(),
            country: "France".into(),
            localtime: "2024-05-01 14:30".into(),
        },
        current: Current {
            temp_c: Measure::from(21.5),
            condition: Condition {
                text: "Sunny".into(),
                icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".into(),
            },
            humidity: Measure::from(40),
            precip_mm: Measure::from(0.1),
            heatindex_c: Measure::from(22.3),
            wind_kph: Measure::from(9.4),
        },
    }
}
