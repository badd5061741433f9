use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HenonError {
    NonFiniteParameter { name: &'static str, value: f64 },
}

impl fmt::Display for HenonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteParameter { name, value } => {
                write!(f, "Henon parameter {} must be finite, got {}", name, value)
            }
        }
    }
}

impl Error for HenonError {}
