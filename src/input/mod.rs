//! Input adapters for the explorer.
//!
//! Adapters receive events from a concrete windowing toolkit and translate
//! them into navigation events.

#[cfg(feature = "gui")]
pub mod gui;
