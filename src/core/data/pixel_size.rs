/// Size of the rendering surface in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height over width, the quantity rubber-band selections preserve.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    /// The pixel-to-plane mapping divides by `n - 1`, so both sides need at
    /// least two pixels.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.width > 1 && self.height > 1
    }
}

impl std::fmt::Display for PixelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
