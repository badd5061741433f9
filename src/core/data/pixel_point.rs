/// A position on the pixel grid as delivered by the host.
///
/// Coordinates are fractional because windowing toolkits report cursor
/// positions as floats; gesture math keeps them that way.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
