//! Page model and registry
//!
//! A page is a named unit of display content bound to a render callback.
//! The registry is the ordered page list built once at setup; its order
//! defines next/previous adjacency and never changes afterwards.

use heapless::Vec;

use crate::backend::DisplayError;
use crate::config::ConfigError;

/// Opaque, stable page identity
///
/// Assigned by the setup step; only ever compared, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageId(pub u16);

/// Render callback invoked with the frame target each time the page
/// is drawn. Plain function pointer: no captures, no allocation.
pub type RenderFn<D> = fn(&mut D) -> Result<(), DisplayError>;

/// A named unit of display content
#[derive(Debug)]
pub struct Page<D> {
    id: PageId,
    render: RenderFn<D>,
}

impl<D> Page<D> {
    /// Create a page bound to a render callback
    pub const fn new(id: PageId, render: RenderFn<D>) -> Self {
        Self { id, render }
    }

    /// Page identity
    pub const fn id(&self) -> PageId {
        self.id
    }

    /// Draw this page into the frame target
    pub fn render(&self, target: &mut D) -> Result<(), DisplayError> {
        (self.render)(target)
    }
}

/// Ordered, immutable page collection
///
/// Built exactly once before the first frame. `N` is the compile-time
/// capacity; the live count may be anything up to it.
#[derive(Debug)]
pub struct PageRegistry<D, const N: usize> {
    pages: Vec<Page<D>, N>,
}

impl<D, const N: usize> PageRegistry<D, N> {
    /// Build the registry from an ordered page list
    ///
    /// Fails if two pages share an identity.
    pub fn new(pages: Vec<Page<D>, N>) -> Result<Self, ConfigError> {
        for (i, page) in pages.iter().enumerate() {
            if pages[..i].iter().any(|p| p.id() == page.id()) {
                return Err(ConfigError::DuplicatePageId(page.id()));
            }
        }
        Ok(Self { pages })
    }

    /// Build an empty registry (no pages configured)
    pub const fn empty() -> Self {
        Self { pages: Vec::new() }
    }

    /// Look up a page by identity
    pub fn get(&self, id: PageId) -> Option<&Page<D>> {
        self.pages.iter().find(|p| p.id() == id)
    }

    /// Position of a page in registry order
    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == id)
    }

    /// Page at a registry position
    pub fn at(&self, index: usize) -> Option<&Page<D>> {
        self.pages.get(index)
    }

    /// First page in registry order, if any
    pub fn first(&self) -> Option<&Page<D>> {
        self.pages.first()
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages are configured
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate pages in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Page<D>> {
        self.pages.iter()
    }
}
