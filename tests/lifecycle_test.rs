//! Lifecycle verification: attach, resize, ready deferral, and the
//! runtime control surface, driven entirely through the headless host
//! capabilities.

#![allow(clippy::unwrap_used)]

use ascii_dither::color::Rgba;
use ascii_dither::config::DitherConfig;
use ascii_dither::framebuffer::Framebuffer;
use ascii_dither::host::{FixedContainer, SimpleDocument};
use ascii_dither::overlay::Target;
use ascii_dither::registry::{element_key, OverlayRegistry, VIEWPORT_KEY};
use ascii_dither::surface::{PixelSurface, Surface, TextSurface};
use ascii_dither::Error;

// ============================================================================
// Attach
// ============================================================================

/// Element attach against a selector with no match creates no
/// surface and registers no handle.
#[test]
fn missing_target_aborts_cleanly() {
    let doc = SimpleDocument::new(800, 600);
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();

    let result = registry.attach_element(&doc, ".missing", DitherConfig::element_defaults());
    assert!(matches!(result, Err(Error::TargetNotFound { .. })));
    assert!(registry.is_empty());
    assert!(!registry.contains(&element_key(".missing")));
}

/// A second viewport attach warns and aborts, leaving exactly
/// one overlay with its state intact.
#[test]
fn duplicate_viewport_attach_aborts() {
    let doc = SimpleDocument::new(800, 600);
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();

    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();
    registry.get_mut(VIEWPORT_KEY).unwrap().set_opacity(0.75);

    let second = registry.attach_viewport(&doc, DitherConfig::default());
    assert!(matches!(second, Err(Error::DuplicateOverlay { .. })));

    assert_eq!(registry.len(), 1);
    let survivor = registry.get(VIEWPORT_KEY).unwrap();
    assert!((survivor.opacity() - 0.75).abs() < f32::EPSILON);
}

/// Element attach exposes the target and the surface it owns.
#[test]
fn element_attach_exposes_references() {
    let doc = SimpleDocument::new(800, 600);
    doc.insert_element(".input-section", FixedContainer::new(320, 180));
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();

    let overlay = registry
        .attach_element(&doc, ".input-section", DitherConfig::element_defaults())
        .unwrap();

    assert_eq!(overlay.target(), &Target::Selector(".input-section".to_string()));
    assert_eq!(overlay.container().measure(), (320, 180));
    assert_eq!(overlay.surface().width(), 320);
    assert_eq!(overlay.surface().height(), 180);
    // The surface was painted on attach: background is opaque white
    assert_eq!(
        overlay.surface().framebuffer().get_pixel(0, 0),
        Some(Rgba::WHITE)
    );
}

/// Viewport and element overlays coexist under distinct keys.
#[test]
fn both_modes_coexist() {
    let doc = SimpleDocument::new(800, 600);
    doc.insert_element("#sidebar", FixedContainer::new(200, 400));
    let mut registry: OverlayRegistry<TextSurface> = OverlayRegistry::new();

    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();
    registry.attach_element(&doc, "#sidebar", DitherConfig::element_defaults()).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(VIEWPORT_KEY));
    assert!(registry.contains(&element_key("#sidebar")));
}

// ============================================================================
// Ready deferral
// ============================================================================

/// Attaching while the document loads defers the initial draw to the
/// ready dispatch; the surface stays untouched until then.
#[test]
fn initial_draw_waits_for_ready() {
    let doc = SimpleDocument::loading(100, 100);
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();

    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();
    let overlay = registry.get(VIEWPORT_KEY).unwrap();
    assert!(overlay.needs_initial_draw());
    // Nothing painted yet: pixels still zeroed, not background white
    assert_eq!(
        overlay.surface().framebuffer().get_pixel(0, 0),
        Some(Rgba::TRANSPARENT)
    );

    doc.finish_loading();
    registry.dispatch_ready();

    let overlay = registry.get(VIEWPORT_KEY).unwrap();
    assert!(!overlay.needs_initial_draw());
    assert_eq!(
        overlay.surface().framebuffer().get_pixel(0, 0),
        Some(Rgba::WHITE)
    );
}

/// A second ready dispatch is a no-op for already-drawn overlays.
#[test]
fn ready_dispatch_idempotent() {
    let doc = SimpleDocument::loading(100, 100);
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();
    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();

    doc.finish_loading();
    registry.dispatch_ready();
    let first = registry
        .get(VIEWPORT_KEY)
        .unwrap()
        .surface()
        .framebuffer()
        .to_compact_pixels();

    registry.dispatch_ready();
    let second = registry
        .get(VIEWPORT_KEY)
        .unwrap()
        .surface()
        .framebuffer()
        .to_compact_pixels();
    assert_eq!(first, second);
}

// ============================================================================
// Resize
// ============================================================================

/// Resize dispatch re-measures every container, reassigns dimensions, and
/// repaints; repeated dispatches at the same size are idempotent.
#[test]
fn resize_tracks_containers() {
    let doc = SimpleDocument::new(100, 100);
    doc.insert_element(".panel", FixedContainer::new(50, 50));
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();

    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();
    registry.attach_element(&doc, ".panel", DitherConfig::element_defaults()).unwrap();

    doc.viewport_container().set_size(300, 200);
    registry.dispatch_resize();

    let viewport = registry.get(VIEWPORT_KEY).unwrap();
    assert_eq!(viewport.surface().width(), 300);
    assert_eq!(viewport.surface().height(), 200);
    // Element container did not change; its overlay keeps its size
    let panel = registry.get(&element_key(".panel")).unwrap();
    assert_eq!(panel.surface().width(), 50);

    let before = viewport.surface().framebuffer().to_compact_pixels();
    registry.dispatch_resize();
    let after = registry
        .get(VIEWPORT_KEY)
        .unwrap()
        .surface()
        .framebuffer()
        .to_compact_pixels();
    assert_eq!(before, after);
}

/// Resizing to zero dimensions is tolerated; the overlay simply paints
/// nothing.
#[test]
fn resize_to_zero_tolerated() {
    let doc = SimpleDocument::new(100, 100);
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();
    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();

    doc.viewport_container().set_size(0, 0);
    registry.dispatch_resize();

    let overlay = registry.get(VIEWPORT_KEY).unwrap();
    assert_eq!(overlay.surface().width(), 0);
    assert!(overlay.surface().framebuffer().to_compact_pixels().is_empty());
}

// ============================================================================
// Control surface
// ============================================================================

/// Out-of-range opacity leaves the prior value untouched.
#[test]
fn out_of_range_opacity_ignored() {
    let doc = SimpleDocument::new(100, 100);
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();
    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();

    let overlay = registry.get_mut(VIEWPORT_KEY).unwrap();
    let before = overlay.opacity();
    overlay.set_opacity(1.5);
    assert!((overlay.opacity() - before).abs() < f32::EPSILON);
    overlay.set_opacity(-0.01);
    assert!((overlay.opacity() - before).abs() < f32::EPSILON);
}

/// Toggle flips visibility; a hidden overlay contributes nothing when the
/// embedding composites.
#[test]
fn toggle_and_composite() {
    let doc = SimpleDocument::new(16, 16);
    let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();
    registry.attach_viewport(&doc, DitherConfig::default().opacity(1.0)).unwrap();

    let mut page = Framebuffer::new(16, 16);
    page.clear(Rgba::BLACK);

    let overlay = registry.get_mut(VIEWPORT_KEY).unwrap();
    overlay.toggle();
    assert!(!overlay.is_visible());
    // Embedding skips hidden overlays; the page stays black
    if overlay.is_visible() {
        overlay.surface().composite_over(&mut page, overlay.opacity()).unwrap();
    }
    assert_eq!(page.get_pixel(0, 0), Some(Rgba::BLACK));

    overlay.toggle();
    assert!(overlay.is_visible());
    if overlay.is_visible() {
        overlay.surface().composite_over(&mut page, overlay.opacity()).unwrap();
    }
    // Full-opacity composite of the white-background pattern
    assert_eq!(page.get_pixel(0, 0), Some(Rgba::WHITE));
}

/// Removal drops the overlay and its key in both modes; repeated removal
/// is a silent no-op.
#[test]
fn remove_deregisters_both_modes() {
    let doc = SimpleDocument::new(100, 100);
    doc.insert_element(".panel", FixedContainer::new(50, 50));
    let mut registry: OverlayRegistry<TextSurface> = OverlayRegistry::new();

    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();
    registry.attach_element(&doc, ".panel", DitherConfig::element_defaults()).unwrap();

    assert!(registry.remove(VIEWPORT_KEY).is_some());
    assert!(registry.remove(&element_key(".panel")).is_some());
    assert!(registry.is_empty());

    // Second removal finds nothing and stays silent
    assert!(registry.remove(VIEWPORT_KEY).is_none());

    // A fresh attach succeeds after removal
    registry.attach_viewport(&doc, DitherConfig::default()).unwrap();
    assert!(registry.contains(VIEWPORT_KEY));
}
