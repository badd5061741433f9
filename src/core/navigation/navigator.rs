use log::{debug, trace};

use crate::core::actions::pan::pan_viewport;
use crate::core::actions::select::select_region;
use crate::core::actions::zoom::{zoom_in, zoom_out};
use crate::core::data::pixel_point::PixelPoint;
use crate::core::navigation::events::{
    ButtonState, EventOutcome, KeyCommand, NavEvent, PointerButton, ScrollDirection,
};
use crate::core::navigation::state::{GestureKind, NavigationState};
use crate::core::viewport::Viewport;

/// Turns pointer, wheel, key and resize events into viewport edits.
///
/// Drag gestures are atomic: once one button is down, events for any other
/// gesture are dropped until the matching release arrives. Keys and resizes
/// bypass the gesture guard entirely.
#[derive(Debug, Clone)]
pub struct Navigator {
    viewport: Viewport,
    state: NavigationState,
}

impl Navigator {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            state: NavigationState::Idle,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn handle_event(&mut self, event: NavEvent) -> EventOutcome {
        match event {
            NavEvent::Button {
                button,
                state,
                position,
            } => self.on_button(button, state, position),
            NavEvent::Scroll {
                direction,
                state,
                position,
            } => self.on_scroll_phase(direction, state, position),
            NavEvent::Key(command) => self.on_key(command),
            NavEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }

    pub fn on_button(
        &mut self,
        button: PointerButton,
        state: ButtonState,
        position: PixelPoint,
    ) -> EventOutcome {
        let kind = match button {
            PointerButton::Primary => GestureKind::Pan,
            PointerButton::Secondary => GestureKind::Select,
        };

        if !self.state.admits(kind) {
            trace!("{button:?} {state:?} dropped during {:?}", self.state);
            return EventOutcome::Ignored;
        }

        let position = self.viewport.flip_y(position);

        match state {
            ButtonState::Pressed => {
                self.state = NavigationState::begin(kind, position);
                debug!("{kind:?} gesture anchored at {position}");
                EventOutcome::GestureStarted
            }
            ButtonState::Released => {
                let Some(anchor) = self.state.anchor() else {
                    trace!("{button:?} released without a press");
                    return EventOutcome::Ignored;
                };

                self.state = NavigationState::Idle;

                match kind {
                    GestureKind::Pan => pan_viewport(&mut self.viewport, anchor, position),
                    _ => select_region(&mut self.viewport, anchor, position),
                }

                EventOutcome::ViewportChanged
            }
        }
    }

    /// One complete wheel tick, for input layers with single wheel events.
    pub fn on_scroll(&mut self, direction: ScrollDirection, position: PixelPoint) -> EventOutcome {
        match self.on_scroll_phase(direction, ButtonState::Pressed, position) {
            EventOutcome::Ignored => EventOutcome::Ignored,
            _ => self.on_scroll_phase(direction, ButtonState::Released, position),
        }
    }

    /// Half of a wheel tick. The press arms the zoom and the release fires
    /// it, so repeated presses from the input layer zoom only once.
    pub fn on_scroll_phase(
        &mut self,
        direction: ScrollDirection,
        state: ButtonState,
        position: PixelPoint,
    ) -> EventOutcome {
        let kind = GestureKind::from_scroll(direction);

        if !self.state.admits(kind) {
            trace!("scroll {direction:?} dropped during {:?}", self.state);
            return EventOutcome::Ignored;
        }

        match state {
            ButtonState::Pressed => {
                self.state = NavigationState::begin(kind, self.viewport.flip_y(position));
                EventOutcome::GestureStarted
            }
            ButtonState::Released => {
                self.state = NavigationState::Idle;

                match direction {
                    ScrollDirection::Up => zoom_in(&mut self.viewport),
                    ScrollDirection::Down => zoom_out(&mut self.viewport),
                }

                EventOutcome::ViewportChanged
            }
        }
    }

    pub fn on_key(&mut self, command: KeyCommand) -> EventOutcome {
        match command {
            KeyCommand::ZoomIn => zoom_in(&mut self.viewport),
            KeyCommand::ZoomOut => zoom_out(&mut self.viewport),
            KeyCommand::Reset => {
                self.viewport.reset();
                debug!("viewport reset to {}", self.viewport.bounds());
            }
            KeyCommand::Exit => return EventOutcome::ExitRequested,
        }

        EventOutcome::ViewportChanged
    }

    /// Applied immediately, whatever gesture is in progress.
    pub fn on_resize(&mut self, width: u32, height: u32) -> EventOutcome {
        self.viewport.resize(width, height);
        EventOutcome::ViewportChanged
    }
}
