use log::{debug, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use crate::controllers::explorer::Explorer;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::pixel_size::PixelSize;
use crate::core::navigation::{EventOutcome, NavEvent};
use crate::input::gui::winit_input::WinitInputAdapter;

const MIN_WINDOW_SIDE: u32 = 200;

/// Opens a window and drives an [`Explorer`] from its events.
///
/// Drawing belongs to a renderer plugged in on `RedrawRequested`; this
/// command only keeps the render parameters current.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut explorer = Explorer::new(self.config)?;
        let requested = self.config.pixel_size;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title("Henon Explorer")
            .with_inner_size(PhysicalSize::new(requested.width, requested.height))
            .with_min_inner_size(PhysicalSize::new(MIN_WINDOW_SIDE, MIN_WINDOW_SIDE))
            .build(&event_loop)?;

        // The platform may hand back a different size than requested.
        let actual = window.inner_size();
        if (actual.width, actual.height) != (requested.width, requested.height) {
            forward(
                &mut explorer,
                NavEvent::Resize {
                    width: actual.width,
                    height: actual.height,
                },
            );
        }

        let mut input = WinitInputAdapter::default();

        event_loop.run(move |event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };

            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Some(params) = explorer.take_changed_render_params() {
                        debug!("render parameters ready: {params:?}");
                    }
                }
                event => {
                    let Some(nav_event) = input.translate(&event) else {
                        return;
                    };

                    match forward(&mut explorer, nav_event) {
                        EventOutcome::ExitRequested => elwt.exit(),
                        outcome if outcome.needs_redraw() => window.request_redraw(),
                        _ => {}
                    }
                }
            }
        })?;

        info!("window closed");
        Ok(())
    }
}

/// Minimised windows report a zero size; the viewport keeps its last
/// renderable size instead of collapsing.
fn forward(explorer: &mut Explorer, event: NavEvent) -> EventOutcome {
    if let NavEvent::Resize { width, height } = event {
        if !PixelSize::new(width, height).is_renderable() {
            debug!("ignoring resize to {width}x{height}");
            return EventOutcome::Ignored;
        }
    }

    explorer.handle_event(event)
}
