//! Distance normalization. Extractors report the raw unit token; anything
//! that stores or compares distances converts to miles here.

use serde::{Deserialize, Serialize};

pub const MILES_PER_KM: f64 = 0.621371;
pub const MILES_PER_METER: f64 = 0.000621371;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Mile,
    Km,
    Meter,
}

impl DistanceUnit {
    /// Parse a unit token such as "miles", "mi", "km", "kilometers", "m".
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "mile" | "miles" | "mi" => Some(DistanceUnit::Mile),
            "km" | "kms" | "k" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Some(DistanceUnit::Km)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Some(DistanceUnit::Meter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Mile => "mile",
            DistanceUnit::Km => "km",
            DistanceUnit::Meter => "meter",
        }
    }
}

pub fn to_miles(distance: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Mile => distance,
        DistanceUnit::Km => distance * MILES_PER_KM,
        DistanceUnit::Meter => distance * MILES_PER_METER,
    }
}

/// Round to two decimals, the precision we show distances at.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(DistanceUnit::parse("Miles"), Some(DistanceUnit::Mile));
        assert_eq!(DistanceUnit::parse("km"), Some(DistanceUnit::Km));
        assert_eq!(DistanceUnit::parse("meters"), Some(DistanceUnit::Meter));
        assert_eq!(DistanceUnit::parse("furlongs"), None);
    }

    #[test]
    fn test_to_miles() {
        assert_eq!(to_miles(3.0, DistanceUnit::Mile), 3.0);
        assert_eq!(round2(to_miles(5.0, DistanceUnit::Km)), 3.11);
        // Provider activities report meters.
        assert_eq!(round2(to_miles(10_000.0, DistanceUnit::Meter)), 6.21);
    }
}
