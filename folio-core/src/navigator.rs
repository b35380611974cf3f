//! Page cursor and wraparound navigation
//!
//! The navigator owns the registry, the current-page cursor, and the
//! change notifier. All navigation reduces to modular arithmetic over
//! the page count; the notifier fires inside every mutating call, after
//! the cursor has moved, so a mutation and its notification are
//! observed as one step.

use crate::page::{Page, PageId, PageRegistry};
use crate::trigger::Notifier;

/// Navigation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavError {
    /// Requested page identity is not in the registry
    PageNotFound(PageId),
}

/// Cursor over an immutable page registry
///
/// Invariant: the cursor is `Some` exactly when the registry is
/// non-empty, and always holds a valid index. Established at
/// construction and preserved by every operation.
#[derive(Debug)]
pub struct PageNavigator<D, const P: usize, const T: usize> {
    registry: PageRegistry<D, P>,
    current: Option<usize>,
    notifier: Notifier<T>,
}

impl<D, const P: usize, const T: usize> PageNavigator<D, P, T> {
    /// Create a navigator positioned on the first page, if any
    pub fn new(registry: PageRegistry<D, P>, notifier: Notifier<T>) -> Self {
        let current = if registry.is_empty() { None } else { Some(0) };
        Self {
            registry,
            current,
            notifier,
        }
    }

    /// The page registry
    pub fn registry(&self) -> &PageRegistry<D, P> {
        &self.registry
    }

    /// Number of configured pages
    pub fn page_count(&self) -> usize {
        self.registry.len()
    }

    /// Currently active page, or `None` when no pages are configured
    pub fn current(&self) -> Option<&Page<D>> {
        self.current.and_then(|i| self.registry.at(i))
    }

    /// Identity of the currently active page
    pub fn current_id(&self) -> Option<PageId> {
        self.current().map(|p| p.id())
    }

    /// Whether the given page is the active one
    pub fn is_displaying(&self, id: PageId) -> bool {
        self.current_id() == Some(id)
    }

    /// Switch to the page with the given identity
    ///
    /// An explicit show always counts as a transition, even when the
    /// page is already active: triggers fire with from == to. On an
    /// unknown identity the cursor is untouched and the error is
    /// returned to the caller.
    pub fn show(&mut self, id: PageId) -> Result<(), NavError> {
        let Some(index) = self.registry.index_of(id) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("show: page {} not in registry", id);
            return Err(NavError::PageNotFound(id));
        };
        self.transition_to(index);
        Ok(())
    }

    /// Advance to the next page, wrapping from last to first
    ///
    /// Silent no-op (no notification) when no pages are configured.
    /// With a single page this is a self-transition and still fires.
    pub fn show_next(&mut self) {
        let count = self.registry.len();
        if count == 0 {
            return;
        }
        let Some(index) = self.current else {
            unreachable!("cursor unset with pages configured");
        };
        self.transition_to((index + 1) % count);
    }

    /// Step back to the previous page, wrapping from first to last
    ///
    /// Silent no-op (no notification) when no pages are configured.
    pub fn show_previous(&mut self) {
        let count = self.registry.len();
        if count == 0 {
            return;
        }
        let Some(index) = self.current else {
            unreachable!("cursor unset with pages configured");
        };
        self.transition_to((index + count - 1) % count);
    }

    /// Move the cursor and fire matching triggers
    ///
    /// `index` must already be validated. The cursor is updated before
    /// the notifier runs, so actions observe the destination page.
    fn transition_to(&mut self, index: usize) {
        let Some(from) = self.current_id() else {
            unreachable!("cursor unset with pages configured");
        };
        self.current = Some(index);
        let Some(to) = self.current_id() else {
            unreachable!("cursor unset with pages configured");
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("page change {} -> {}", from, to);
        self.notifier.notify(from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DisplayError;
    use crate::page::RenderFn;
    use crate::trigger::{OnPageChangeTrigger, PageFilter};
    use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use heapless::Vec;

    fn noop(_: &mut ()) -> Result<(), DisplayError> {
        Ok(())
    }

    fn navigator(n: u16) -> PageNavigator<(), 8, 4> {
        let mut pages = Vec::new();
        for id in 0..n {
            pages.push(Page::new(PageId(id), noop as RenderFn<()>)).ok();
        }
        let registry = PageRegistry::new(pages).unwrap();
        PageNavigator::new(registry, Notifier::new())
    }

    #[test]
    fn test_starts_on_first_page() {
        let nav = navigator(3);
        assert_eq!(nav.current_id(), Some(PageId(0)));
        assert!(nav.is_displaying(PageId(0)));
        assert!(!nav.is_displaying(PageId(1)));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut nav = navigator(3);
        nav.show_next();
        assert_eq!(nav.current_id(), Some(PageId(1)));
        nav.show_next();
        assert_eq!(nav.current_id(), Some(PageId(2)));
        nav.show_next();
        assert_eq!(nav.current_id(), Some(PageId(0)));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut nav = navigator(3);
        nav.show_previous();
        assert_eq!(nav.current_id(), Some(PageId(2)));
        nav.show_previous();
        assert_eq!(nav.current_id(), Some(PageId(1)));
    }

    #[test]
    fn test_show_unknown_page_leaves_cursor() {
        let mut nav = navigator(3);
        nav.show(PageId(1)).unwrap();
        let err = nav.show(PageId(7)).unwrap_err();
        assert_eq!(err, NavError::PageNotFound(PageId(7)));
        assert_eq!(nav.current_id(), Some(PageId(1)));
    }

    #[test]
    fn test_empty_registry_is_silent_noop() {
        let mut nav = navigator(0);
        nav.show_next();
        nav.show_previous();
        assert_eq!(nav.current_id(), None);
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_single_page_self_transition_notifies() {
        static FIRED: AtomicU32 = AtomicU32::new(0);
        let mut pages: Vec<Page<()>, 8> = Vec::new();
        pages.push(Page::new(PageId(5), noop as RenderFn<()>)).ok();
        let registry = PageRegistry::new(pages).unwrap();
        let mut notifier: Notifier<4> = Notifier::new();
        notifier
            .register(OnPageChangeTrigger::new(
                PageFilter::Any,
                PageFilter::Any,
                |from, to| {
                    assert_eq!(from, to);
                    FIRED.fetch_add(1, Ordering::Relaxed);
                },
            ))
            .unwrap();
        let mut nav = PageNavigator::new(registry, notifier);

        nav.show_next();
        nav.show_previous();
        assert_eq!(nav.current_id(), Some(PageId(5)));
        assert_eq!(FIRED.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_explicit_show_of_current_page_notifies() {
        static FIRED: AtomicUsize = AtomicUsize::new(0);
        let mut pages: Vec<Page<()>, 8> = Vec::new();
        for id in 0..2 {
            pages.push(Page::new(PageId(id), noop as RenderFn<()>)).ok();
        }
        let registry = PageRegistry::new(pages).unwrap();
        let mut notifier: Notifier<4> = Notifier::new();
        notifier
            .register(OnPageChangeTrigger::new(
                PageFilter::Page(PageId(0)),
                PageFilter::Page(PageId(0)),
                |_, _| {
                    FIRED.fetch_add(1, Ordering::Relaxed);
                },
            ))
            .unwrap();
        let mut nav = PageNavigator::new(registry, notifier);

        nav.show(PageId(0)).unwrap();
        assert_eq!(FIRED.load(Ordering::Relaxed), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Closure of the cyclic group: n steps forward from any
            // start lands back on the start, for any registry size n.
            #[test]
            fn next_n_times_is_identity(n in 1u16..=8, start in 0u16..8) {
                let start = start % n;
                let mut nav = navigator(n);
                nav.show(PageId(start)).unwrap();
                for _ in 0..n {
                    nav.show_next();
                }
                prop_assert_eq!(nav.current_id(), Some(PageId(start)));
            }

            #[test]
            fn previous_n_times_is_identity(n in 1u16..=8, start in 0u16..8) {
                let start = start % n;
                let mut nav = navigator(n);
                nav.show(PageId(start)).unwrap();
                for _ in 0..n {
                    nav.show_previous();
                }
                prop_assert_eq!(nav.current_id(), Some(PageId(start)));
            }

            // Forward then backward is the identity from any position
            #[test]
            fn next_then_previous_is_identity(n in 1u16..=8, start in 0u16..8) {
                let start = start % n;
                let mut nav = navigator(n);
                nav.show(PageId(start)).unwrap();
                nav.show_next();
                nav.show_previous();
                prop_assert_eq!(nav.current_id(), Some(PageId(start)));
            }
        }
    }
}
