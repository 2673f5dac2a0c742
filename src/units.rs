//! Distance parsing, unit inference and conversion to miles.

use std::fmt;
use std::str::FromStr;

use crate::analyzers::utility::round2;
use crate::error::{ReportError, Result};

const MILES_PER_KM: f64 = 0.621371;
const MILES_PER_METER: f64 = 0.000621371;

/// Unit of the distance column in an export.
///
/// `Auto` is only meaningful as configuration; it is resolved into a concrete
/// unit with [`infer_unit`] before any value is converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceUnit {
    #[default]
    Auto,
    Miles,
    Km,
    Meters,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Auto => "auto",
            DistanceUnit::Miles => "miles",
            DistanceUnit::Km => "km",
            DistanceUnit::Meters => "meters",
        }
    }

    /// Returns the concrete unit, inferring it from `max_distance` when `Auto`.
    pub fn resolve(self, max_distance: f64) -> DistanceUnit {
        match self {
            DistanceUnit::Auto => infer_unit(max_distance),
            unit => unit,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(DistanceUnit::Auto),
            "miles" => Ok(DistanceUnit::Miles),
            "km" => Ok(DistanceUnit::Km),
            "meters" => Ok(DistanceUnit::Meters),
            other => Err(ReportError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// Guesses the unit of a whole export from its largest distance.
///
/// | Max distance | Unit   |
/// |--------------|--------|
/// | > 100        | meters |
/// | > 20         | km     |
/// | otherwise    | miles  |
///
/// A file of short meter-denominated runs (all below 20) is read as miles.
pub fn infer_unit(max_distance: f64) -> DistanceUnit {
    match max_distance {
        d if d > 100.0 => DistanceUnit::Meters,
        d if d > 20.0 => DistanceUnit::Km,
        _ => DistanceUnit::Miles,
    }
}

/// Converts `distance` expressed in `unit` into miles.
///
/// # Errors
///
/// Returns [`ReportError::UnsupportedUnit`] if `unit` is still `Auto`.
pub fn to_miles(distance: f64, unit: DistanceUnit) -> Result<f64> {
    match unit {
        DistanceUnit::Miles => Ok(distance),
        DistanceUnit::Km => Ok(distance * MILES_PER_KM),
        DistanceUnit::Meters => Ok(distance * MILES_PER_METER),
        DistanceUnit::Auto => Err(ReportError::UnsupportedUnit(unit.to_string())),
    }
}

/// Converts to miles and rounds to two decimals.
pub fn to_rounded_miles(distance: f64, unit: DistanceUnit) -> Result<f64> {
    Ok(round2(to_miles(distance, unit)?))
}

/// Parses a distance cell such as `"1,234.5"`.
///
/// Whitespace and thousands separators are stripped first; an empty result
/// counts as zero.
///
/// # Errors
///
/// Returns [`ReportError::InvalidDistance`] if the cleaned text is not a
/// finite number.
pub fn parse_distance(value: &str) -> Result<f64> {
    let cleaned = value.trim().replace(',', "");
    if cleaned.is_empty() {
        return Ok(0.0);
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ReportError::InvalidDistance(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_unit_boundaries() {
        assert_eq!(infer_unit(3.1), DistanceUnit::Miles);
        assert_eq!(infer_unit(20.0), DistanceUnit::Miles);
        assert_eq!(infer_unit(20.01), DistanceUnit::Km);
        assert_eq!(infer_unit(100.0), DistanceUnit::Km);
        assert_eq!(infer_unit(100.5), DistanceUnit::Meters);
        assert_eq!(infer_unit(5000.0), DistanceUnit::Meters);
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(to_rounded_miles(10.0, DistanceUnit::Km).unwrap(), 6.21);
        assert_eq!(to_rounded_miles(5000.0, DistanceUnit::Meters).unwrap(), 3.11);
        assert_eq!(to_rounded_miles(3.1, DistanceUnit::Miles).unwrap(), 3.1);
    }

    #[test]
    fn test_auto_cannot_be_converted() {
        let err = to_miles(1.0, DistanceUnit::Auto).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedUnit(_)));
    }

    #[test]
    fn test_resolve_keeps_explicit_unit() {
        assert_eq!(DistanceUnit::Km.resolve(5000.0), DistanceUnit::Km);
        assert_eq!(DistanceUnit::Auto.resolve(5000.0), DistanceUnit::Meters);
    }

    #[test]
    fn test_from_str_round_trips_tags() {
        for tag in ["auto", "miles", "km", "meters"] {
            let unit: DistanceUnit = tag.parse().unwrap();
            assert_eq!(unit.to_string(), tag);
        }
        assert!(matches!(
            "furlongs".parse::<DistanceUnit>(),
            Err(ReportError::UnsupportedUnit(_))
        ));
    }

    #[test]
    fn test_parse_distance_cleans_input() {
        assert_eq!(parse_distance(" 3.10 ").unwrap(), 3.1);
        assert_eq!(parse_distance("1,234.5").unwrap(), 1234.5);
        assert_eq!(parse_distance("   ").unwrap(), 0.0);
        assert_eq!(parse_distance("-2").unwrap(), -2.0);
    }

    #[test]
    fn test_parse_distance_rejects_garbage() {
        let err = parse_distance("12 km").unwrap_err();
        assert!(matches!(err, ReportError::InvalidDistance(ref raw) if raw == "12 km"));
        assert!(parse_distance("NaN").is_err());
        assert!(parse_distance("inf").is_err());
    }
}
