use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric reading as display text.
///
/// Numbers are stored in their shortest round-trip form with a decimal point
/// kept on floats, so `21.0` shows as `21.0` rather than `21` (and `21.50` as
/// `21.5`). String readings are kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Measure(String);

impl Measure {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        let text = serde_json::Number::from_f64(value)
            .map(|n| n.to_string())
            .unwrap_or_else(|| value.to_string());
        Self(text)
    }
}

impl From<i64> for Measure {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// `"<date> <time>"` in the location's own timezone.
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Protocol-relative icon reference, e.g. `//cdn.weatherapi.com/weather/64x64/day/113.png`.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: Measure,
    pub condition: Condition,
    pub humidity: Measure,
    pub precip_mm: Measure,
    pub heatindex_c: Measure,
    pub wind_kph: Measure,
}

/// Current conditions for one location, shaped like the `current.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: Current,
}
