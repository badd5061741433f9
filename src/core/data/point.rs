use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// A point in the Cartesian fractal plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
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
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointParseError {
    MissingSeparator { input: String },
    InvalidCoordinate { input: String },
}

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { input } => {
                write!(f, "point '{}' must have the form <x>,<y>", input)
            }
            Self::InvalidCoordinate { input } => {
                write!(f, "point '{}' contains a coordinate that is not a plain decimal", input)
            }
        }
    }
}

impl Error for PointParseError {}

// Accepts an optional leading minus, optional integer digits, an optional
// dot, then at least one digit. No exponent, no plus sign.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or(("", unsigned));

    whole.bytes().all(|b| b.is_ascii_digit())
        && !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Point {
    type Err = PointParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (x_text, y_text) =
            input
                .split_once(',')
                .ok_or_else(|| PointParseError::MissingSeparator {
                    input: input.to_string(),
                })?;

        if !is_plain_decimal(x_text) || !is_plain_decimal(y_text) {
            return Err(PointParseError::InvalidCoordinate {
                input: input.to_string(),
            });
        }

        let invalid = |_| PointParseError::InvalidCoordinate {
            input: input.to_string(),
        };

        Ok(Self {
            x: x_text.parse().map_err(invalid)?,
            y: y_text.parse().map_err(invalid)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let result = Point::new(1.0, 2.0) + Point::new(3.0, -4.0);

        assert_eq!(result, Point::new(4.0, -2.0));
    }

    #[test]
    fn test_sub() {
        let result = Point::new(1.0, 1.0) - Point::new(-1.0, -1.0);

        assert_eq!(result, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_mul_by_scalar() {
        let result = Point::new(1.5, -2.0) * 2.0;

        assert_eq!(result, Point::new(3.0, -4.0));
    }

    #[test]
    fn test_midpoint() {
        let result = Point::new(-5.0, -1.0).midpoint(Point::new(5.0, 3.0));

        assert_eq!(result, Point::new(0.0, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-5.0, 2.5).to_string(), "(-5,2.5)");
    }

    #[test]
    fn test_parse_integer_pair() {
        assert_eq!("-5,5".parse::<Point>(), Ok(Point::new(-5.0, 5.0)));
    }

    #[test]
    fn test_parse_fractional_pair() {
        assert_eq!("0.25,-.5".parse::<Point>(), Ok(Point::new(0.25, -0.5)));
    }

    #[test]
    fn test_parse_without_separator_fails() {
        assert_eq!(
            "1.0 2.0".parse::<Point>(),
            Err(PointParseError::MissingSeparator {
                input: "1.0 2.0".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_decimal_coordinates() {
        for input in ["a,1", "1,", ",1", "1.,2", "+1,2", "1e3,2", "1,2,3", " 1,2"] {
            assert_eq!(
                input.parse::<Point>(),
                Err(PointParseError::InvalidCoordinate {
                    input: input.to_string()
                }),
                "input {input:?} should be rejected"
            );
        }
    }
}
