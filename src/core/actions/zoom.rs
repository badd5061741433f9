use log::debug;

use crate::core::viewport::Viewport;

/// Fraction of the full extent each edge moves per zoom step.
pub const ZOOM_STEP: f64 = 0.1;

/// Moves every edge of the region by `scale_factor` times the full extent
/// on its axis, outward for a positive factor and inward for a negative one.
///
/// One step scales the extent by `1 + 2 * scale_factor`, so a zoom in
/// followed by a zoom out of the same step does not restore the region:
/// `0.8 * 1.2 = 0.96` of the original extent remains.
pub fn zoom_viewport(viewport: &mut Viewport, scale_factor: f64) {
    let zoomed = viewport.bounds().expanded_by(scale_factor);

    viewport.set_bounds(zoomed.bottom_left(), zoomed.top_right());

    debug!("zoomed by {scale_factor}, region {zoomed}");
}

pub fn zoom_in(viewport: &mut Viewport) {
    zoom_viewport(viewport, -ZOOM_STEP);
}

pub fn zoom_out(viewport: &mut Viewport) {
    zoom_viewport(viewport, ZOOM_STEP);
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
    fn test_zoom_out_moves_each_edge_by_a_tenth_of_extent() {
        let mut viewport = create_viewport();

        zoom_out(&mut viewport);

        assert_eq!(viewport.bottom_left(), Point::new(-6.0, -6.0));
        assert_eq!(viewport.top_right(), Point::new(6.0, 6.0));
    }

    #[test]
    fn test_zoom_in_moves_each_edge_inward() {
        let mut viewport = create_viewport();

        zoom_in(&mut viewport);

        assert_eq!(viewport.bottom_left(), Point::new(-4.0, -4.0));
        assert_eq!(viewport.top_right(), Point::new(4.0, 4.0));
    }

    #[test]
    fn test_zoom_keeps_center() {
        let bounds = CartesianRect::new(Point::new(1.0, -3.0), Point::new(3.0, 5.0)).unwrap();
        let mut viewport = Viewport::new(bounds, PixelSize::new(64, 64));

        zoom_out(&mut viewport);
        zoom_in(&mut viewport);

        let center = viewport.bounds().center();
        assert!((center.x - 2.0).abs() < TOLERANCE);
        assert!((center.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_zoom_in_then_out_leaves_four_percent_drift() {
        let mut viewport = create_viewport();

        zoom_in(&mut viewport);
        zoom_out(&mut viewport);

        // 10 * (1 - 0.2) * (1 + 0.2)
        assert!((viewport.bounds().width() - 9.6).abs() < TOLERANCE);
        assert!((viewport.bounds().height() - 9.6).abs() < TOLERANCE);
    }

    #[test]
    fn test_repeated_zoom_in_never_inverts() {
        let mut viewport = create_viewport();

        for _ in 0..200 {
            zoom_in(&mut viewport);
        }

        assert!(viewport.bounds().width() > 0.0);
        assert!(viewport.bounds().height() > 0.0);
    }
}
