//! Snapshot handed to the renderer before each draw.

use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::fractals::henon::params::HenonParams;

/// Fractal-specific settings. Selecting between them is a rendering concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalParams {
    Henon(HenonParams),
    Mandelbrot,
}

/// Everything a renderer uploads for one frame.
///
/// `PartialEq` lets the host skip frames whose parameters did not change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub bottom_left: Point,
    pub top_right: Point,
    pub pixel_size: PixelSize,
    pub max_iterations: u32,
    pub escape_threshold: f64,
    pub fractal: FractalParams,
}
