use log::info;

use crate::core::config::errors::ConfigError;
use crate::core::data::cartesian_rect::{CartesianRect, CartesianRectError};
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::henon::params::HenonParams;

const DEFAULT_MAX_ITERATIONS: u32 = 512;
const DEFAULT_ESCAPE_THRESHOLD: f64 = 512.0;
const DEFAULT_PIXEL_SIZE: PixelSize = PixelSize::new(512, 512);

pub(crate) fn default_region() -> CartesianRect {
    CartesianRect::from_corners(Point::new(-5.0, -5.0), Point::new(5.0, 5.0))
}

/// Values injected into the explorer at startup.
///
/// `region` becomes both the first view and the target of every reset.
/// The fractal settings are carried for the renderer only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub fractal: FractalKinds,
    pub henon: HenonParams,
    pub region: CartesianRect,
    pub pixel_size: PixelSize,
    pub max_iterations: u32,
    pub escape_threshold: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            fractal: FractalKinds::default(),
            henon: HenonParams::default(),
            region: default_region(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
        }
    }
}

impl ExplorerConfig {
    /// Builds a region from two `"<x>,<y>"` corner strings.
    pub fn parse_region(bottom_left: &str, top_right: &str) -> Result<CartesianRect, ConfigError> {
        let region = CartesianRect::new(bottom_left.parse()?, top_right.parse()?)?;

        Ok(region)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.region.is_valid() {
            return Err(ConfigError::InvalidRegion(CartesianRectError::InvalidSize {
                width: self.region.width(),
                height: self.region.height(),
            }));
        }

        if !self.pixel_size.is_renderable() {
            return Err(ConfigError::PixelSizeTooSmall {
                width: self.pixel_size.width,
                height: self.pixel_size.height,
            });
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if !self.escape_threshold.is_finite() || self.escape_threshold <= 0.0 {
            return Err(ConfigError::InvalidEscapeThreshold(self.escape_threshold));
        }

        Ok(())
    }

    pub fn log_summary(&self) {
        info!("displaying {} fractal", self.fractal.display_name());

        if self.fractal == FractalKinds::Henon {
            info!("a: {}", self.henon.a());
            info!("b: {}", self.henon.b());
            info!("escape threshold: {}", self.escape_threshold);
        }

        info!("surface: {} pixels", self.pixel_size);
        info!("max iterations: {}", self.max_iterations);
        info!("lower left point: {}", self.region.bottom_left());
        info!("upper right point: {}", self.region.top_right());
    }
}
