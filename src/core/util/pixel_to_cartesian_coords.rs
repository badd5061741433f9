use crate::core::data::cartesian_rect::CartesianRect;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Maps a pixel position onto the plane.
///
/// Pixel `0` lands on the bottom-left edge and pixel `n - 1` on the top-right
/// edge, so the grid samples the region inclusive of both edges. Positions
/// outside the grid extrapolate linearly. The caller guarantees
/// [`PixelSize::is_renderable`]; a one-pixel side divides by zero.
#[must_use]
pub fn pixel_to_cartesian_coords(
    pixel_position: PixelPoint,
    pixel_size: PixelSize,
    region: CartesianRect,
) -> Point {
    let bottom_left = region.bottom_left();
    let x = bottom_left.x
        + (pixel_position.x / (f64::from(pixel_size.width) - 1.0)) * region.width();
    let y = bottom_left.y
        + (pixel_position.y / (f64::from(pixel_size.height) - 1.0)) * region.height();

    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> CartesianRect {
        CartesianRect::new(Point::new(-2.0, -1.0), Point::new(1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_pixel_to_cartesian_bottom_left() {
        let result =
            pixel_to_cartesian_coords(PixelPoint::new(0.0, 0.0), PixelSize::new(101, 101), region());

        assert_eq!(result, Point::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_cartesian_top_right() {
        let result = pixel_to_cartesian_coords(
            PixelPoint::new(100.0, 100.0),
            PixelSize::new(101, 101),
            region(),
        );

        assert_eq!(result, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_pixel_to_cartesian_center() {
        let region = CartesianRect::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0)).unwrap();

        let result =
            pixel_to_cartesian_coords(PixelPoint::new(50.0, 50.0), PixelSize::new(101, 101), region);

        assert_eq!(result, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_pixel_outside_grid_extrapolates() {
        let region = CartesianRect::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();

        let result =
            pixel_to_cartesian_coords(PixelPoint::new(-10.0, 20.0), PixelSize::new(11, 11), region);

        assert_eq!(result, Point::new(-10.0, 20.0));
    }
}
