use crate::core::data::axis::Axis;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CartesianRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for CartesianRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "cartesian rect size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for CartesianRectError {}

/// Axis-aligned region of the plane, `bottom_left` to `top_right`.
///
/// [`CartesianRect::new`] rejects empty or inverted regions. Navigation goes
/// through [`CartesianRect::from_corners`] instead, because a zero-size
/// selection is allowed to produce a degenerate view that the user can reset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CartesianRect {
    bottom_left: Point,
    top_right: Point,
}

impl CartesianRect {
    pub fn new(bottom_left: Point, top_right: Point) -> Result<Self, CartesianRectError> {
        let rect = Self::from_corners(bottom_left, top_right);

        if !rect.is_valid() {
            return Err(CartesianRectError::InvalidSize {
                width: rect.width(),
                height: rect.height(),
            });
        }

        Ok(rect)
    }

    #[must_use]
    pub const fn from_corners(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    #[must_use]
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    #[must_use]
    pub fn top_right(&self) -> Point {
        self.top_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.top_right.x - self.bottom_left.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_right.y - self.bottom_left.y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.bottom_left.midpoint(self.top_right)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        let (width, height) = (self.width(), self.height());

        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }

    /// Replaces the bounds of one axis, keeping the other.
    #[must_use]
    pub fn with_axis(&self, axis: Axis, min: f64, max: f64) -> Self {
        let mut rect = *self;

        match axis {
            Axis::X => {
                rect.bottom_left.x = min;
                rect.top_right.x = max;
            }
            Axis::Y => {
                rect.bottom_left.y = min;
                rect.top_right.y = max;
            }
        }

        rect
    }

    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        Self::from_corners(self.bottom_left + offset, self.top_right + offset)
    }

    /// Multiplies each extent by its factor while holding the center fixed.
    #[must_use]
    pub fn scaled_about_center(&self, x_factor: f64, y_factor: f64) -> Self {
        let center = self.center();
        let half_width = x_factor * self.width() / 2.0;
        let half_height = y_factor * self.height() / 2.0;

        Self::from_corners(
            Point::new(center.x - half_width, center.y - half_height),
            Point::new(center.x + half_width, center.y + half_height),
        )
    }

    /// Moves every edge outward by `fraction` of the full extent on its axis.
    /// A negative fraction moves the edges inward.
    #[must_use]
    pub fn expanded_by(&self, fraction: f64) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;

        Self::from_corners(
            Point::new(self.bottom_left.x - dx, self.bottom_left.y - dy),
            Point::new(self.top_right.x + dx, self.top_right.y + dy),
        )
    }
}

impl fmt::Display for CartesianRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.bottom_left, self.top_right)
    }
}
