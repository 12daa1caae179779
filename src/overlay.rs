//! A single live overlay: one surface bound to one container.
//!
//! Overlays are created and owned by the
//! [`OverlayRegistry`](crate::registry::OverlayRegistry); this type holds
//! the per-instance state and the runtime controls (redraw, opacity,
//! visibility toggle).

use std::rc::Rc;

use crate::config::DitherConfig;
use crate::host::Container;
use crate::pattern;
use crate::surface::Surface;

/// What an overlay is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The whole viewport.
    Viewport,
    /// The first element matching a selector.
    Selector(String),
}

/// One attached dithering overlay.
pub struct Overlay<S: Surface> {
    key: String,
    target: Target,
    config: DitherConfig,
    container: Rc<dyn Container>,
    surface: S,
    opacity: f32,
    visible: bool,
    pending_initial: bool,
}

impl<S: Surface> Overlay<S> {
    pub(crate) fn new(
        key: String,
        target: Target,
        config: DitherConfig,
        container: Rc<dyn Container>,
        surface: S,
        pending_initial: bool,
    ) -> Self {
        let opacity = config.opacity;
        Self {
            key,
            target,
            config,
            container,
            surface,
            opacity,
            visible: true,
            pending_initial,
        }
    }

    /// Identity key this overlay is registered under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attach target.
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The configuration fixed at attach time.
    #[must_use]
    pub fn config(&self) -> &DitherConfig {
        &self.config
    }

    /// The container this overlay sizes itself to.
    #[must_use]
    pub fn container(&self) -> &Rc<dyn Container> {
        &self.container
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The drawing surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Repaint the surface at its current size.
    pub fn redraw(&mut self) {
        pattern::render(&mut self.surface, &self.config);
    }

    /// Re-measure the container, reassign surface dimensions, and redraw.
    ///
    /// Idempotent for an unchanged container size; safe to call
    /// arbitrarily often.
    pub fn sync_to_container(&mut self) {
        let (width, height) = self.container.measure();
        self.surface.resize(width, height);
        self.redraw();
        self.pending_initial = false;
    }

    /// Whether the initial draw is still deferred on the ready signal.
    #[must_use]
    pub fn needs_initial_draw(&self) -> bool {
        self.pending_initial
    }

    /// Current overlay opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the overlay opacity.
    ///
    /// Applied only when `0.0 <= opacity <= 1.0`; out-of-range values are
    /// silently ignored.
    pub fn set_opacity(&mut self, opacity: f32) {
        if (0.0..=1.0).contains(&opacity) {
            self.opacity = opacity;
        }
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip the overlay between shown and hidden.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
