use log::debug;

use crate::core::data::axis::Axis;
use crate::core::data::cartesian_rect::CartesianRect;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_cartesian_coords::pixel_to_cartesian_coords;

/// The visible region of the plane and the pixel grid it is drawn onto.
///
/// The initial region is captured at construction and only used by
/// [`Viewport::reset`]; resizes and gestures never move it.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pixel_size: PixelSize,
    bounds: CartesianRect,
    initial_bounds: CartesianRect,
}

impl Viewport {
    #[must_use]
    pub fn new(bounds: CartesianRect, pixel_size: PixelSize) -> Self {
        Self {
            pixel_size,
            bounds,
            initial_bounds: bounds,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> CartesianRect {
        self.bounds
    }

    #[must_use]
    pub fn initial_bounds(&self) -> CartesianRect {
        self.initial_bounds
    }

    #[must_use]
    pub fn bottom_left(&self) -> Point {
        self.bounds.bottom_left()
    }

    #[must_use]
    pub fn top_right(&self) -> Point {
        self.bounds.top_right()
    }

    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_size.width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_size.height
    }

    #[must_use]
    pub fn pixel_to_cartesian(&self, pixel_position: PixelPoint) -> Point {
        pixel_to_cartesian_coords(pixel_position, self.pixel_size, self.bounds)
    }

    /// Converts a host position (origin top-left, y down) into grid
    /// coordinates where increasing y points up the plane.
    #[must_use]
    pub fn flip_y(&self, pixel_position: PixelPoint) -> PixelPoint {
        PixelPoint {
            x: pixel_position.x,
            y: f64::from(self.pixel_size.height) - 1.0 - pixel_position.y,
        }
    }

    /// Replaces the region wholesale. Ordering of the corners is the
    /// caller's concern.
    pub fn set_bounds(&mut self, bottom_left: Point, top_right: Point) {
        self.bounds = CartesianRect::from_corners(bottom_left, top_right);
    }

    pub fn set_axis_bounds(&mut self, axis: Axis, min: f64, max: f64) {
        self.bounds = self.bounds.with_axis(axis, min, max);
    }

    /// Scales the region by new/old pixel count on each axis about its
    /// center, then adopts the new pixel size.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        let x_factor = f64::from(new_width) / f64::from(self.pixel_size.width);
        let y_factor = f64::from(new_height) / f64::from(self.pixel_size.height);

        self.bounds = self.bounds.scaled_about_center(x_factor, y_factor);
        self.pixel_size = PixelSize::new(new_width, new_height);

        debug!(
            "viewport resized to {} pixels, region {}",
            self.pixel_size, self.bounds
        );
    }

    pub fn reset(&mut self) {
        self.bounds = self.initial_bounds;
    }
}
