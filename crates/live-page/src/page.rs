//! In-memory page model addressed by region identifiers.
//!
//! A page is a flat list of top-level regions, each holding the outer markup
//! of one element. Regions are shared through `Rc<RefCell<_>>` because every
//! controller runs on the same single-threaded loop; borrows are released
//! before any await point.

use std::cell::RefCell;
use std::rc::Rc;

use fragment_stream::TargetId;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    id: TargetId,
    markup: String,
    shown: bool,
}

#[derive(Debug, Default)]
struct Document {
    regions: Vec<Region>,
}

/// Handle to a region resolved for one payload application.
///
/// Handles stay valid while the set of regions is unchanged; replacements
/// never add or remove regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHandle(usize);

/// Shared, cheaply cloneable page model.
///
/// # Examples
/// ```
/// use fragment_stream::TargetId;
/// use live_page::Page;
///
/// let id = TargetId::new("member-description").expect("valid id");
/// let page = Page::new().with_region(id.clone(), "<div id=\"member-description\"></div>");
/// assert!(page.resolve(&id).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Page {
    document: Rc<RefCell<Document>>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region and return the page.
    #[must_use]
    pub fn with_region(self, id: TargetId, markup: impl Into<String>) -> Self {
        self.mount(id, markup);
        self
    }

    /// Add a region, or overwrite it when the identifier is already present.
    pub fn mount(&self, id: TargetId, markup: impl Into<String>) {
        let content = markup.into();
        let mut document = self.document.borrow_mut();
        if let Some(region) = document.regions.iter_mut().find(|r| r.id == id) {
            region.markup = content;
            return;
        }
        document.regions.push(Region {
            id,
            markup: content,
            shown: false,
        });
    }

    /// Resolve a target to a region handle.
    #[must_use]
    pub fn resolve(&self, id: &TargetId) -> Option<RegionHandle> {
        self.document
            .borrow()
            .regions
            .iter()
            .position(|region| &region.id == id)
            .map(RegionHandle)
    }

    /// Replace the markup of a resolved region.
    ///
    /// Returns `false` when the handle no longer points at a region.
    pub fn replace(&self, handle: RegionHandle, markup: &str) -> bool {
        let mut document = self.document.borrow_mut();
        match document.regions.get_mut(handle.0) {
            Some(region) => {
                markup.clone_into(&mut region.markup);
                true
            }
            None => false,
        }
    }

    /// Markup currently held by a region.
    #[must_use]
    pub fn markup(&self, id: &TargetId) -> Option<String> {
        self.document
            .borrow()
            .regions
            .iter()
            .find(|region| &region.id == id)
            .map(|region| region.markup.clone())
    }

    /// Whether the region is currently presented as a visible overlay.
    #[must_use]
    pub fn is_shown(&self, id: &TargetId) -> bool {
        self.document
            .borrow()
            .regions
            .iter()
            .any(|region| &region.id == id && region.shown)
    }

    /// Toggle overlay visibility. Returns `false` when the region is missing.
    pub fn set_shown(&self, id: &TargetId, shown: bool) -> bool {
        let mut document = self.document.borrow_mut();
        match document.regions.iter_mut().find(|region| &region.id == id) {
            Some(region) => {
                region.shown = shown;
                true
            }
            None => false,
        }
    }

    /// Drop everything inside a region, leaving an empty mount point.
    ///
    /// Returns `false` when the region is missing.
    pub fn vacate(&self, id: &TargetId) -> bool {
        let mut document = self.document.borrow_mut();
        match document.regions.iter_mut().find(|region| &region.id == id) {
            Some(region) => {
                region.markup = empty_mount(id);
                region.shown = false;
                true
            }
            None => false,
        }
    }

    /// Whether the region exists and holds nothing but its mount point.
    #[must_use]
    pub fn is_vacant(&self, id: &TargetId) -> bool {
        self.markup(id).is_some_and(|markup| markup == empty_mount(id))
    }

    /// Copy of every region as `(id, markup)` pairs in page order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(TargetId, String)> {
        self.document
            .borrow()
            .regions
            .iter()
            .map(|region| (region.id.clone(), region.markup.clone()))
            .collect()
    }
}

fn empty_mount(id: &TargetId) -> String {
    format!("<div id=\"{id}\"></div>")
}
