use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::data::pixel_point::PixelPoint;
use crate::core::navigation::{ButtonState, KeyCommand, NavEvent, PointerButton, ScrollDirection};

/// Translates winit window events into navigation events.
///
/// winit reports button presses without a position, so the adapter keeps the
/// last cursor position it has seen.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WinitInputAdapter {
    cursor: PixelPoint,
}

impl WinitInputAdapter {
    #[must_use]
    pub fn cursor(&self) -> PixelPoint {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<NavEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.button_event(*button, *state),
            WindowEvent::MouseWheel { delta, .. } => self.scroll_event(delta),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => key_event(code, event.state),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::Resized(size) => Some(NavEvent::Resize {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = PixelPoint::new(x, y);
    }

    #[must_use]
    pub fn button_event(&self, button: MouseButton, state: ElementState) -> Option<NavEvent> {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            _ => return None,
        };

        Some(NavEvent::Button {
            button,
            state: button_state(state),
            position: self.cursor,
        })
    }

    /// winit delivers one event per wheel tick, so it maps to the firing
    /// half of a scroll gesture.
    #[must_use]
    pub fn scroll_event(&self, delta: &MouseScrollDelta) -> Option<NavEvent> {
        let vertical = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        let direction = if vertical > 0.0 {
            ScrollDirection::Up
        } else if vertical < 0.0 {
            ScrollDirection::Down
        } else {
            return None;
        };

        Some(NavEvent::Scroll {
            direction,
            state: ButtonState::Released,
            position: self.cursor,
        })
    }
}

#[must_use]
pub fn key_event(code: KeyCode, state: ElementState) -> Option<NavEvent> {
    if state != ElementState::Pressed {
        return None;
    }

    let command = match code {
        KeyCode::KeyZ => KeyCommand::ZoomIn,
        KeyCode::KeyX => KeyCommand::ZoomOut,
        KeyCode::KeyR => KeyCommand::Reset,
        KeyCode::Escape => KeyCommand::Exit,
        _ => return None,
    };

    Some(NavEvent::Key(command))
}

fn button_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}
