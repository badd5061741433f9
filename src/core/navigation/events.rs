//! Input vocabulary understood by the [`Navigator`](super::Navigator).
//!
//! These types decouple navigation from any particular windowing toolkit;
//! host adapters translate their native events into [`NavEvent`]s.

use crate::core::data::pixel_point::PixelPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    /// Drag to pan.
    Primary,
    /// Drag to rubber-band select.
    Secondary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel away from the user; zooms in.
    Up,
    /// Wheel towards the user; zooms out.
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    ZoomIn,
    ZoomOut,
    Reset,
    Exit,
}

impl KeyCommand {
    const ESCAPE: char = '\u{1b}';

    /// Keyboard bindings: `z` zooms in, `x` zooms out, `r` resets and
    /// Escape exits. Letters are case-insensitive.
    #[must_use]
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            'z' | 'Z' => Some(Self::ZoomIn),
            'x' | 'X' => Some(Self::ZoomOut),
            'r' | 'R' => Some(Self::Reset),
            Self::ESCAPE => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One raw input event. Positions are host pixels with the origin at the
/// top-left corner of the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NavEvent {
    Button {
        button: PointerButton,
        state: ButtonState,
        position: PixelPoint,
    },
    /// Input layers that report each wheel tick as a press/release pair send
    /// both halves; layers with single wheel events send `Released` only.
    Scroll {
        direction: ScrollDirection,
        state: ButtonState,
        position: PixelPoint,
    },
    Key(KeyCommand),
    Resize {
        width: u32,
        height: u32,
    },
}

/// What the host should do after an event has been handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event did not fit the current gesture and was dropped.
    Ignored,
    /// A multi-event gesture has begun; the region is unchanged so far.
    GestureStarted,
    ViewportChanged,
    ExitRequested,
}

impl EventOutcome {
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        self == Self::ViewportChanged
    }
}
