//! Host-facing controller for interactive exploration.
//!
//! A host builds one [`Explorer`] at startup, forwards every input event to
//! it, and reads [`RenderParams`] before drawing.

mod controller;
pub mod render_params;

pub use controller::Explorer;
pub use render_params::{FractalParams, RenderParams};
