//! Page-change triggers
//!
//! A trigger pairs a from/to filter with an action. The notifier holds
//! the registered triggers and fires the matching ones, in registration
//! order, every time the cursor moves.

use heapless::Vec;

use crate::config::ConfigError;
use crate::page::PageId;

/// Transition filter: match any page, or one specific page
///
/// The "unspecified means wildcard" convention of the configuration
/// layer is made explicit here so it is type-checked, not implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageFilter {
    /// Match every page
    Any,
    /// Match exactly this page
    Page(PageId),
}

impl PageFilter {
    /// Whether this filter accepts the given page
    pub fn matches(&self, id: PageId) -> bool {
        match self {
            PageFilter::Any => true,
            PageFilter::Page(want) => *want == id,
        }
    }
}

/// Action invoked on a matching transition, with (from, to) page ids.
///
/// Runs after the cursor has already moved, so the runtime observed
/// from inside the action reports the destination page as current.
pub type TriggerFn = fn(PageId, PageId);

/// A registered (filter, action) pair
#[derive(Debug, Clone, Copy)]
pub struct OnPageChangeTrigger {
    from: PageFilter,
    to: PageFilter,
    action: TriggerFn,
}

impl OnPageChangeTrigger {
    /// Create a trigger firing on transitions matching both filters
    pub const fn new(from: PageFilter, to: PageFilter, action: TriggerFn) -> Self {
        Self { from, to, action }
    }

    /// Whether this trigger fires for a from → to transition
    pub fn matches(&self, from: PageId, to: PageId) -> bool {
        self.from.matches(from) && self.to.matches(to)
    }

    /// The source-side filter
    pub fn from_filter(&self) -> PageFilter {
        self.from
    }

    /// The destination-side filter
    pub fn to_filter(&self) -> PageFilter {
        self.to
    }
}

/// Ordered trigger list with synchronous dispatch
///
/// `T` is the compile-time trigger capacity.
#[derive(Debug)]
pub struct Notifier<const T: usize> {
    triggers: Vec<OnPageChangeTrigger, T>,
}

impl<const T: usize> Notifier<T> {
    /// Create an empty notifier
    pub const fn new() -> Self {
        Self {
            triggers: Vec::new(),
        }
    }

    /// Register a trigger; fires after all previously registered ones
    pub fn register(&mut self, trigger: OnPageChangeTrigger) -> Result<(), ConfigError> {
        self.triggers
            .push(trigger)
            .map_err(|_| ConfigError::CapacityExceeded)
    }

    /// Number of registered triggers
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Whether no triggers are registered
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Fire every trigger matching the transition, in registration order
    ///
    /// Blocking: the mutating navigation call does not return until all
    /// matching actions have run.
    pub fn notify(&self, from: PageId, to: PageId) {
        for trigger in &self.triggers {
            if trigger.matches(from, to) {
                (trigger.action)(from, to);
            }
        }
    }
}

impl<const T: usize> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
