use std::{error::Error, fmt};

use crate::core::data::cartesian_rect::CartesianRectError;
use crate::core::data::point::PointParseError;
use crate::core::fractals::fractal_kinds::UnknownFractalKindError;
use crate::core::fractals::henon::errors::HenonError;

/// A startup configuration the explorer refuses to run with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidRegion(CartesianRectError),
    PixelSizeTooSmall { width: u32, height: u32 },
    ZeroMaxIterations,
    InvalidEscapeThreshold(f64),
    Henon(HenonError),
    InvalidPoint(PointParseError),
    UnknownFractal(UnknownFractalKindError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion(err) => write!(f, "invalid initial region: {}", err),
            Self::PixelSizeTooSmall { width, height } => {
                write!(
                    f,
                    "surface must be at least 2x2 pixels, got {}x{}",
                    width, height
                )
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeThreshold(value) => {
                write!(f, "escape threshold must be positive and finite, got {}", value)
            }
            Self::Henon(err) => write!(f, "{}", err),
            Self::InvalidPoint(err) => write!(f, "{}", err),
            Self::UnknownFractal(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            Self::Henon(err) => Some(err),
            Self::InvalidPoint(err) => Some(err),
            Self::UnknownFractal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CartesianRectError> for ConfigError {
    fn from(err: CartesianRectError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<HenonError> for ConfigError {
    fn from(err: HenonError) -> Self {
        Self::Henon(err)
    }
}

impl From<PointParseError> for ConfigError {
    fn from(err: PointParseError) -> Self {
        Self::InvalidPoint(err)
    }
}

impl From<UnknownFractalKindError> for ConfigError {
    fn from(err: UnknownFractalKindError) -> Self {
        Self::UnknownFractal(err)
    }
}
