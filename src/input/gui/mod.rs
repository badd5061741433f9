//! winit host glue.
//!
//! Translates window events into navigation events and runs the event loop.
//! Rendering is left to whoever consumes the render parameters.

pub mod commands;
pub mod winit_input;

pub use commands::run_gui::RunGuiCommand;
pub use winit_input::WinitInputAdapter;
