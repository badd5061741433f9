use log::debug;

use crate::core::data::axis::Axis;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::viewport::Viewport;

/// Drags the plane so the point under `from` ends up under `to`.
///
/// Both positions are grid coordinates (already y-flipped).
pub fn pan_viewport(viewport: &mut Viewport, from: PixelPoint, to: PixelPoint) {
    let start = viewport.pixel_to_cartesian(from);
    let end = viewport.pixel_to_cartesian(to);
    let offset = start - end;
    let bottom_left = viewport.bottom_left();
    let top_right = viewport.top_right();

    viewport.set_axis_bounds(Axis::X, bottom_left.x + offset.x, top_right.x + offset.x);
    viewport.set_axis_bounds(Axis::Y, bottom_left.y + offset.y, top_right.y + offset.y);

    debug!("panned by {offset}, region {}", viewport.bounds());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::cartesian_rect::CartesianRect;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::data::point::Point;

    const TOLERANCE: f64 = 1e-12;

    fn create_viewport() -> Viewport {
        let bounds = CartesianRect::new(Point::new(-5.0, -5.0), Point::new(5.0, 5.0)).unwrap();

        Viewport::new(bounds, PixelSize::new(512, 512))
    }

    #[test]
    fn test_pan_shifts_both_axes_by_cartesian_delta() {
        let mut viewport = create_viewport();
        let delta = 1000.0 / 511.0;

        pan_viewport(
            &mut viewport,
            PixelPoint::new(100.0, 100.0),
            PixelPoint::new(200.0, 200.0),
        );

        assert!((viewport.bottom_left().x - (-5.0 - delta)).abs() < TOLERANCE);
        assert!((viewport.bottom_left().y - (-5.0 - delta)).abs() < TOLERANCE);
        assert!((viewport.top_right().x - (5.0 - delta)).abs() < TOLERANCE);
        assert!((viewport.top_right().y - (5.0 - delta)).abs() < TOLERANCE);
    }

    #[test]
    fn test_pan_keeps_extent() {
        let mut viewport = create_viewport();

        pan_viewport(
            &mut viewport,
            PixelPoint::new(10.0, 400.0),
            PixelPoint::new(300.0, 20.0),
        );

        assert!((viewport.bounds().width() - 10.0).abs() < TOLERANCE);
        assert!((viewport.bounds().height() - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_pan_there_and_back_restores_bounds() {
        let mut viewport = create_viewport();
        let a = PixelPoint::new(37.0, 410.0);
        let b = PixelPoint::new(250.0, 12.0);

        pan_viewport(&mut viewport, a, b);
        pan_viewport(&mut viewport, b, a);

        assert!((viewport.bottom_left().x - -5.0).abs() < TOLERANCE);
        assert!((viewport.bottom_left().y - -5.0).abs() < TOLERANCE);
        assert!((viewport.top_right().x - 5.0).abs() < TOLERANCE);
        assert!((viewport.top_right().y - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_pan_to_same_pixel_is_a_no_op() {
        let mut viewport = create_viewport();
        let initial = viewport.bounds();

        pan_viewport(
            &mut viewport,
            PixelPoint::new(42.0, 42.0),
            PixelPoint::new(42.0, 42.0),
        );

        assert_eq!(viewport.bounds(), initial);
    }
}
