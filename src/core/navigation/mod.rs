//! Gesture state machine driving the [`Viewport`](crate::core::viewport::Viewport).
//!
//! The host forwards one [`NavEvent`] at a time to [`Navigator::handle_event`]
//! and re-reads the viewport whenever the outcome asks for a redraw.

pub mod events;
mod navigator;
pub mod state;

pub use events::{ButtonState, EventOutcome, KeyCommand, NavEvent, PointerButton, ScrollDirection};
pub use navigator::Navigator;
pub use state::{GestureKind, NavigationState};
