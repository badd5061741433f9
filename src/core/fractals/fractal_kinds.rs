use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The fractals a renderer can draw for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Henon,
    Mandelbrot,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Henon, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Henon => "Henon",
            Self::Mandelbrot => "Mandelbrot",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Henon => "henon",
            Self::Mandelbrot => "mandelbrot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalKindError {
    pub name: String,
}

impl fmt::Display for UnknownFractalKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown fractal '{}', expected 'henon' or 'mandelbrot'",
            self.name
        )
    }
}

impl Error for UnknownFractalKindError {}

impl FromStr for FractalKinds {
    type Err = UnknownFractalKindError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == name)
            .ok_or_else(|| UnknownFractalKindError {
                name: name.to_string(),
            })
    }
}
