use crate::core::fractals::henon::errors::HenonError;

const DEFAULT_A: f64 = 0.2;
const DEFAULT_B: f64 = 0.9991;

/// Coefficients of the Henon map `(x, y) -> (1 - a x^2 + y, b x)`.
///
/// Navigation never reads these; they travel with the viewport so the
/// renderer can upload them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HenonParams {
    a: f64,
    b: f64,
}

impl Default for HenonParams {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
        }
    }
}

impl HenonParams {
    pub fn new(a: f64, b: f64) -> Result<Self, HenonError> {
        let mut params = Self::default();
        params.set_a(a)?;
        params.set_b(b)?;

        Ok(params)
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), HenonError> {
        if !a.is_finite() {
            return Err(HenonError::NonFiniteParameter { name: "a", value: a });
        }

        self.a = a;
        Ok(())
    }

    pub fn set_b(&mut self, b: f64) -> Result<(), HenonError> {
        if !b.is_finite() {
            return Err(HenonError::NonFiniteParameter { name: "b", value: b });
        }

        self.b = b;
        Ok(())
    }
}
