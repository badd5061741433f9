mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;

pub use controllers::explorer::{Explorer, FractalParams, RenderParams};
pub use crate::core::actions::pan::pan_viewport;
pub use crate::core::actions::select::{SelectionRect, select_region, selection_pixel_rect};
pub use crate::core::actions::zoom::{ZOOM_STEP, zoom_in, zoom_out, zoom_viewport};
pub use crate::core::config::errors::ConfigError;
pub use crate::core::config::explorer_config::ExplorerConfig;
pub use crate::core::data::axis::Axis;
pub use crate::core::data::cartesian_rect::{CartesianRect, CartesianRectError};
pub use crate::core::data::pixel_point::PixelPoint;
pub use crate::core::data::pixel_size::PixelSize;
pub use crate::core::data::point::{Point, PointParseError};
pub use crate::core::fractals::fractal_kinds::{FractalKinds, UnknownFractalKindError};
pub use crate::core::fractals::henon::errors::HenonError;
pub use crate::core::fractals::henon::params::HenonParams;
pub use crate::core::navigation::{
    ButtonState, EventOutcome, GestureKind, KeyCommand, NavEvent, NavigationState, Navigator,
    PointerButton, ScrollDirection,
};
pub use crate::core::viewport::Viewport;
#[cfg(feature = "gui")]
pub use input::gui::{RunGuiCommand, WinitInputAdapter};
pub use logging::{LoggingConfig, init_logging};
