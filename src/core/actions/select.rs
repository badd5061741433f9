use log::debug;

use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::pixel_size::PixelSize;
use crate::core::viewport::Viewport;

/// An aspect-corrected selection on the pixel grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelectionRect {
    pub min: PixelPoint,
    pub max: PixelPoint,
}

impl SelectionRect {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Grows the rubber band dragged from `from` to `to` until its aspect ratio
/// matches the screen, keeping it centered on the middle of the drag.
///
/// A drag that is relatively wider than the screen keeps its width and
/// grows in y; otherwise it keeps its height and grows in x.
#[must_use]
pub fn selection_pixel_rect(pixel_size: PixelSize, from: PixelPoint, to: PixelPoint) -> SelectionRect {
    let drag_width = (to.x - from.x).abs();
    let drag_height = (to.y - from.y).abs();
    let drag_aspect_ratio = drag_height / drag_width;
    let screen_aspect_ratio = pixel_size.aspect_ratio();

    let (width, height) = if drag_aspect_ratio < screen_aspect_ratio {
        (drag_width, drag_width * screen_aspect_ratio)
    } else {
        (drag_height / screen_aspect_ratio, drag_height)
    };

    let middle_x = (from.x + to.x) / 2.0;
    let middle_y = (from.y + to.y) / 2.0;

    SelectionRect {
        min: PixelPoint::new(middle_x - width / 2.0, middle_y - height / 2.0),
        max: PixelPoint::new(middle_x + width / 2.0, middle_y + height / 2.0),
    }
}

/// Replaces the region with the part of the plane under the aspect-corrected
/// rubber band. Positions are grid coordinates (already y-flipped).
pub fn select_region(viewport: &mut Viewport, from: PixelPoint, to: PixelPoint) {
    let selection = selection_pixel_rect(viewport.pixel_size(), from, to);
    let bottom_left = viewport.pixel_to_cartesian(selection.min);
    let top_right = viewport.pixel_to_cartesian(selection.max);

    viewport.set_bounds(bottom_left, top_right);

    debug!(
        "selected pixels {} to {}, region {}",
        selection.min,
        selection.max,
        viewport.bounds()
    );
}
