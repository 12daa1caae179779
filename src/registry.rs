//! Overlay registry and identity keys.
//!
//! The registry is the explicit replacement for the ambient global handles
//! the overlay concept grew up with: every live overlay is owned here,
//! keyed by identity, with create/lookup/remove plus the two host event
//! dispatches (resize, document-ready). At most one overlay exists per
//! key; a second attach warns and aborts without touching the first.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::config::DitherConfig;
use crate::error::{Error, Result};
use crate::host::{Document, ReadyState};
use crate::overlay::{Overlay, Target};
use crate::surface::Surface;

/// Identity key of the viewport-wide overlay.
pub const VIEWPORT_KEY: &str = "ascii-dithering-bg";

/// Identity key for an element-scoped overlay.
///
/// Derived from the selector with every non-alphanumeric character
/// replaced by `_`, so `.input-section` keys as
/// `ascii-bg-_input_section`.
#[must_use]
pub fn element_key(selector: &str) -> String {
    let sanitized: String = selector
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("ascii-bg-{sanitized}")
}

/// Owner of all live overlays for one host document.
pub struct OverlayRegistry<S: Surface> {
    overlays: HashMap<String, Overlay<S>>,
}

impl<S: Surface> Default for OverlayRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> OverlayRegistry<S> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { overlays: HashMap::new() }
    }

    /// Attach a viewport-wide overlay under [`VIEWPORT_KEY`].
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateOverlay`] if a viewport overlay is already live;
    /// the existing overlay is left untouched.
    pub fn attach_viewport(
        &mut self,
        doc: &dyn Document,
        config: DitherConfig,
    ) -> Result<&mut Overlay<S>> {
        self.attach(doc, VIEWPORT_KEY.to_string(), Target::Viewport, config)
    }

    /// Attach an element-scoped overlay to the first match of `selector`.
    ///
    /// # Errors
    ///
    /// [`Error::TargetNotFound`] if the selector matches nothing, or
    /// [`Error::DuplicateOverlay`] if an overlay for this selector's key
    /// is already live. Neither leaves any partial state behind.
    pub fn attach_element(
        &mut self,
        doc: &dyn Document,
        selector: &str,
        config: DitherConfig,
    ) -> Result<&mut Overlay<S>> {
        let key = element_key(selector);
        let target = Target::Selector(selector.to_string());
        self.attach(doc, key, target, config)
    }

    fn attach(
        &mut self,
        doc: &dyn Document,
        key: String,
        target: Target,
        config: DitherConfig,
    ) -> Result<&mut Overlay<S>> {
        if self.overlays.contains_key(&key) {
            warn!("overlay already exists for '{key}'");
            return Err(Error::DuplicateOverlay { key });
        }

        let container = match &target {
            Target::Viewport => doc.viewport(),
            Target::Selector(selector) => match doc.query(selector) {
                Some(container) => container,
                None => {
                    warn!("target element '{selector}' not found");
                    return Err(Error::TargetNotFound { selector: selector.clone() });
                }
            },
        };

        let (width, height) = container.measure();
        let surface = S::create(width, height, &config)?;
        let deferred = doc.ready_state() == ReadyState::Loading;
        let mut overlay = Overlay::new(key.clone(), target, config, container, surface, deferred);

        if deferred {
            debug!("overlay '{key}' attached while loading; initial draw deferred");
        } else {
            overlay.redraw();
        }
        info!("overlay '{key}' attached ({width}x{height})");

        Ok(self.overlays.entry(key).or_insert(overlay))
    }

    /// React to a host resize: re-measure every container, reassign
    /// surface dimensions, redraw.
    ///
    /// Synchronous and idempotent per measured size; callers may invoke
    /// it arbitrarily often without debouncing.
    pub fn dispatch_resize(&mut self) {
        for overlay in self.overlays.values_mut() {
            overlay.sync_to_container();
        }
    }

    /// React to the one-shot document-ready signal: run the initial
    /// measure-and-draw for overlays attached while loading.
    pub fn dispatch_ready(&mut self) {
        for overlay in self.overlays.values_mut() {
            if overlay.needs_initial_draw() {
                overlay.sync_to_container();
            }
        }
    }

    /// Remove an overlay, dropping its surface and deregistering its key.
    ///
    /// A key with no live overlay is a silent no-op, so removal is
    /// idempotent. Unlike the scripts this crate descends from, removal
    /// deregisters the handle in both modes.
    pub fn remove(&mut self, key: &str) -> Option<Overlay<S>> {
        let removed = self.overlays.remove(key);
        if removed.is_some() {
            info!("overlay '{key}' removed");
        }
        removed
    }

    /// Look up a live overlay.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Overlay<S>> {
        self.overlays.get(key)
    }

    /// Look up a live overlay mutably (control-surface access).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Overlay<S>> {
        self.overlays.get_mut(key)
    }

    /// Whether a live overlay exists for the key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.overlays.contains_key(key)
    }

    /// Number of live overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Whether no overlays are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Iterate the live identity keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.overlays.keys().map(String::as_str)
    }
}
