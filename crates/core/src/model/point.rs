use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::format_num;

/// Largest coordinate magnitude a point may hold. Keeps range spans finite.
pub const MAX_COORDINATE: f64 = 1e300;

/// True for finite values within [`MAX_COORDINATE`] of zero.
#[must_use]
pub fn is_coordinate_value(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_COORDINATE
}

/// A data-space sample the learner can drag around by editing its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> f64 {
        match coordinate {
            Coordinate::X => self.x,
            Coordinate::Y => self.y,
        }
    }

    pub fn set(&mut self, coordinate: Coordinate, value: f64) {
        match coordinate {
            Coordinate::X => self.x = value,
            Coordinate::Y => self.y = value,
        }
    }

    /// Both coordinates are finite and within [`MAX_COORDINATE`].
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        is_coordinate_value(self.x) && is_coordinate_value(self.y)
    }

    /// Hover text shown next to a marker, e.g. `(0, -2.2)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("({}, {})", format_num(self.x), format_num(self.y))
    }
}

/// Which field of a point an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coordinate {
    X,
    Y,
}

impl Coordinate {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Coordinate::X => "x",
            Coordinate::Y => "y",
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown coordinate: {0}")]
pub struct ParseCoordinateError(String);

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Coordinate::X),
            "y" | "Y" => Ok(Coordinate::Y),
            other => Err(ParseCoordinateError(other.to_string())),
        }
    }
}

/// Parse a learner-typed value. Only finite reals within [`MAX_COORDINATE`]
/// are accepted.
#[must_use]
pub fn parse_coordinate_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| is_coordinate_value(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_one_field() {
        let mut point = Point::new(1.0, 2.0);
        point.set(Coordinate::Y, -3.5);
        assert_eq!(point, Point::new(1.0, -3.5));
        assert_eq!(point.get(Coordinate::X), 1.0);
    }

    #[test]
    fn coordinate_parses_from_field_name() {
        assert_eq!("x".parse::<Coordinate>().unwrap(), Coordinate::X);
        assert_eq!(" Y ".parse::<Coordinate>().unwrap(), Coordinate::Y);
        assert!("z".parse::<Coordinate>().is_err());
    }

    #[test]
    fn parse_value_rejects_non_finite_and_garbage() {
        assert_eq!(parse_coordinate_value(" -1.25 "), Some(-1.25));
        assert_eq!(parse_coordinate_value("3"), Some(3.0));
        assert_eq!(parse_coordinate_value(""), None);
        assert_eq!(parse_coordinate_value("abc"), None);
        assert_eq!(parse_coordinate_value("NaN"), None);
        assert_eq!(parse_coordinate_value("inf"), None);
        assert_eq!(parse_coordinate_value("-infinity"), None);
        assert_eq!(parse_coordinate_value("1e400"), None);
        assert_eq!(parse_coordinate_value("-1e301"), None);
        assert_eq!(parse_coordinate_value("1e300"), Some(MAX_COORDINATE));
        assert_eq!(parse_coordinate_value("1e17"), Some(1e17));
    }

    #[test]
    fn label_rounds_for_display() {
        assert_eq!(Point::new(0.0, -2.2).label(), "(0, -2.2)");
        assert_eq!(Point::new(1.23456, 2.0).label(), "(1.235, 2)");
    }
}
