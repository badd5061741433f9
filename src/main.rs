use henon_explorer::{
    ButtonState, EventOutcome, Explorer, ExplorerConfig, KeyCommand, LoggingConfig, NavEvent,
    PixelPoint, PointerButton, ScrollDirection, init_logging,
};
use log::info;

/// A short tour: pan, rubber-band into a corner, zoom with wheel and keys,
/// widen the window, then reset.
fn demo_session() -> Vec<NavEvent> {
    let button = |button, state, x, y| NavEvent::Button {
        button,
        state,
        position: PixelPoint::new(x, y),
    };

    vec![
        button(PointerButton::Primary, ButtonState::Pressed, 100.0, 411.0),
        button(PointerButton::Primary, ButtonState::Released, 200.0, 311.0),
        button(PointerButton::Secondary, ButtonState::Pressed, 256.0, 256.0),
        button(PointerButton::Secondary, ButtonState::Released, 384.0, 192.0),
        NavEvent::Scroll {
            direction: ScrollDirection::Up,
            state: ButtonState::Released,
            position: PixelPoint::new(256.0, 256.0),
        },
        NavEvent::Key(KeyCommand::ZoomOut),
        NavEvent::Resize {
            width: 1024,
            height: 512,
        },
        NavEvent::Key(KeyCommand::Reset),
        NavEvent::Key(KeyCommand::Exit),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());

    let mut explorer = Explorer::new(ExplorerConfig::default())?;

    for event in demo_session() {
        if explorer.handle_event(event) == EventOutcome::ExitRequested {
            break;
        }

        if let Some(params) = explorer.take_changed_render_params() {
            info!(
                "{:?} -> view {} to {} on {}",
                event, params.bottom_left, params.top_right, params.pixel_size
            );
        }
    }

    Ok(())
}
