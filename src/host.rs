//! Host environment capabilities.
//!
//! The lifecycle layer never talks to a real document or window; it sees
//! the host through two small traits: [`Container`] (something with a
//! measurable content box) and [`Document`] (ready state, the viewport
//! container, selector lookup). [`FixedContainer`] and [`SimpleDocument`]
//! are in-memory implementations for headless use; an embedding supplies
//! its own to drive real DOM nodes.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Document load state at attach time.
///
/// Two-valued: overlays attached while `Loading` defer their initial draw
/// until the ready signal; anything else draws immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// Content is still loading; initial draws are deferred.
    Loading,
    /// Content is available; draws run immediately.
    #[default]
    Ready,
}

/// A target container an overlay can size itself to.
pub trait Container {
    /// Current content-box dimensions in pixels.
    fn measure(&self) -> (u32, u32);
}

/// The host document: ready state, viewport, and element lookup.
pub trait Document {
    /// Current load state.
    fn ready_state(&self) -> ReadyState;

    /// The viewport-wide container (window inner size).
    fn viewport(&self) -> Rc<dyn Container>;

    /// First container matching a selector, if any.
    fn query(&self, selector: &str) -> Option<Rc<dyn Container>>;
}

/// In-memory container whose size can be changed between resize dispatches.
#[derive(Debug, Default)]
pub struct FixedContainer {
    size: Cell<(u32, u32)>,
}

impl FixedContainer {
    /// Create a container with the given content-box size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Rc<Self> {
        Rc::new(Self { size: Cell::new((width, height)) })
    }

    /// Change the container's size; takes effect on the next measure.
    pub fn set_size(&self, width: u32, height: u32) {
        self.size.set((width, height));
    }
}

impl Container for FixedContainer {
    fn measure(&self) -> (u32, u32) {
        self.size.get()
    }
}

/// In-memory document for headless embedding and tests.
#[derive(Debug)]
pub struct SimpleDocument {
    ready: Cell<ReadyState>,
    viewport: Rc<FixedContainer>,
    elements: RefCell<HashMap<String, Rc<FixedContainer>>>,
}

impl SimpleDocument {
    /// Create a ready document with the given viewport size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            ready: Cell::new(ReadyState::Ready),
            viewport: FixedContainer::new(width, height),
            elements: RefCell::new(HashMap::new()),
        }
    }

    /// Create a document still in the loading state.
    #[must_use]
    pub fn loading(width: u32, height: u32) -> Self {
        let doc = Self::new(width, height);
        doc.ready.set(ReadyState::Loading);
        doc
    }

    /// Mark the document ready. One-way; there is no un-ready.
    pub fn finish_loading(&self) {
        self.ready.set(ReadyState::Ready);
    }

    /// Register an element container under a selector.
    pub fn insert_element(&self, selector: &str, container: Rc<FixedContainer>) {
        self.elements
            .borrow_mut()
            .insert(selector.to_string(), container);
    }

    /// The viewport container, for driving size changes.
    #[must_use]
    pub fn viewport_container(&self) -> Rc<FixedContainer> {
        Rc::clone(&self.viewport)
    }
}

impl Document for SimpleDocument {
    fn ready_state(&self) -> ReadyState {
        self.ready.get()
    }

    fn viewport(&self) -> Rc<dyn Container> {
        Rc::clone(&self.viewport) as Rc<dyn Container>
    }

    fn query(&self, selector: &str) -> Option<Rc<dyn Container>> {
        self.elements
            .borrow()
            .get(selector)
            .map(|c| Rc::clone(c) as Rc<dyn Container>)
    }
}
