use log::{debug, info};

use crate::controllers::explorer::render_params::{FractalParams, RenderParams};
use crate::core::config::errors::ConfigError;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::navigation::{EventOutcome, NavEvent, Navigator};
use crate::core::viewport::Viewport;

/// The navigation core as seen by a host: one validated configuration, one
/// navigator, and change tracking for the per-frame read.
#[derive(Debug, Clone)]
pub struct Explorer {
    config: ExplorerConfig,
    navigator: Navigator,
    last_presented: Option<RenderParams>,
}

impl Explorer {
    pub fn new(config: ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        config.log_summary();

        let viewport = Viewport::new(config.region, config.pixel_size);

        Ok(Self {
            config,
            navigator: Navigator::new(viewport),
            last_presented: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.navigator.viewport()
    }

    pub fn handle_event(&mut self, event: NavEvent) -> EventOutcome {
        let outcome = self.navigator.handle_event(event);

        if outcome == EventOutcome::ExitRequested {
            info!("exit requested");
        }

        outcome
    }

    #[must_use]
    pub fn render_params(&self) -> RenderParams {
        let viewport = self.navigator.viewport();
        let fractal = match self.config.fractal {
            FractalKinds::Henon => FractalParams::Henon(self.config.henon),
            FractalKinds::Mandelbrot => FractalParams::Mandelbrot,
        };

        RenderParams {
            bottom_left: viewport.bottom_left(),
            top_right: viewport.top_right(),
            pixel_size: viewport.pixel_size(),
            max_iterations: self.config.max_iterations,
            escape_threshold: self.config.escape_threshold,
            fractal,
        }
    }

    /// Returns the current parameters if they differ from the last ones
    /// returned here, and records them as presented.
    pub fn take_changed_render_params(&mut self) -> Option<RenderParams> {
        let params = self.render_params();

        if self.last_presented.is_some_and(|last| last == params) {
            return None;
        }

        debug!(
            "presenting region {} -> {} at {}",
            params.bottom_left, params.top_right, params.pixel_size
        );
        self.last_presented = Some(params);

        Some(params)
    }
}
