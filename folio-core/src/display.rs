//! Display runtime
//!
//! Owns the navigator and the resolved per-frame settings, and exposes
//! the two surfaces of the engine: the navigation API called by
//! automation actions, and the single render entry point called by the
//! external polling loop each frame tick.

use crate::backend::{DisplayBackend, DisplayError};
use crate::config::Rotation;
use crate::navigator::{NavError, PageNavigator};
use crate::page::{Page, PageId, RenderFn};
use crate::testcard;

/// Page display runtime
///
/// Built by [`DisplayBuilder`](crate::config::DisplayBuilder). `D` is
/// the frame target type, `P` the page capacity, `T` the trigger
/// capacity. Single execution context assumed; a multi-threaded host
/// must guard the whole value with one mutex so a mutation and its
/// notification stay inseparable.
#[derive(Debug)]
pub struct Display<D, const P: usize, const T: usize> {
    navigator: PageNavigator<D, P, T>,
    lambda: Option<RenderFn<D>>,
    auto_clear: bool,
    show_test_card: bool,
    rotation: Rotation,
}

impl<D, const P: usize, const T: usize> Display<D, P, T> {
    pub(crate) fn new(
        navigator: PageNavigator<D, P, T>,
        lambda: Option<RenderFn<D>>,
        auto_clear: bool,
        show_test_card: bool,
        rotation: Rotation,
    ) -> Self {
        Self {
            navigator,
            lambda,
            auto_clear,
            show_test_card,
            rotation,
        }
    }

    /// Switch to the page with the given identity
    pub fn show(&mut self, id: PageId) -> Result<(), NavError> {
        self.navigator.show(id)
    }

    /// Advance to the next page, wrapping after the last
    pub fn show_next(&mut self) {
        self.navigator.show_next();
    }

    /// Step back to the previous page, wrapping before the first
    pub fn show_previous(&mut self) {
        self.navigator.show_previous();
    }

    /// Currently active page, or `None` when no pages are configured
    pub fn current(&self) -> Option<&Page<D>> {
        self.navigator.current()
    }

    /// Identity of the currently active page
    pub fn current_id(&self) -> Option<PageId> {
        self.navigator.current_id()
    }

    /// Whether the given page is the active one
    pub fn is_displaying(&self, id: PageId) -> bool {
        self.navigator.is_displaying(id)
    }

    /// Number of configured pages
    pub fn page_count(&self) -> usize {
        self.navigator.page_count()
    }

    /// Resolved auto-clear flag
    pub fn auto_clear(&self) -> bool {
        self.auto_clear
    }

    /// Configured rotation, for the driver to apply
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl<D: DisplayBackend, const P: usize, const T: usize> Display<D, P, T> {
    /// Render one frame into the target
    ///
    /// Called by the external polling loop at its own cadence:
    /// auto-clear first, then the test card override, the active page,
    /// the fallback lambda, or nothing. Render-callback errors are not
    /// caught here; they propagate to the loop.
    pub fn render_frame(&self, target: &mut D) -> Result<(), DisplayError> {
        if self.auto_clear {
            target.clear()?;
        }
        if self.show_test_card {
            // Diagnostic override, takes precedence over pages and lambda
            return testcard::draw(target);
        }
        if self.navigator.page_count() > 0 {
            let Some(page) = self.navigator.current() else {
                unreachable!("cursor unset with pages configured");
            };
            return page.render(target);
        }
        if let Some(lambda) = self.lambda {
            return lambda(target);
        }
        // No pages, no lambda: a blank frame is a valid configured state
        Ok(())
    }
}
