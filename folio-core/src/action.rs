//! Automation commands
//!
//! The closed set of operations the automation layer can apply to the
//! display: show a page, step forward, step backward, and the
//! is-displaying condition. The set is fixed at compile time, so it is
//! an enum rather than an open dispatch table.

use crate::display::Display;
use crate::navigator::NavError;
use crate::page::PageId;

/// Source of a page identity at the call site
///
/// A page reference in an automation may be a fixed identity or a
/// computed one; either way it is resolved to a concrete [`PageId`]
/// before the navigator sees it, keeping expression evaluation out of
/// the state machine.
#[derive(Debug, Clone, Copy)]
pub enum PageIdSource {
    /// Identity known at configuration time
    Fixed(PageId),
    /// Identity produced when the action runs
    Templated(fn() -> PageId),
}

impl PageIdSource {
    /// Resolve to a concrete identity
    pub fn resolve(&self) -> PageId {
        match self {
            PageIdSource::Fixed(id) => *id,
            PageIdSource::Templated(producer) => producer(),
        }
    }
}

/// A navigation command applied to the display
#[derive(Debug, Clone, Copy)]
pub enum PageAction {
    /// Show a specific page
    Show(PageIdSource),
    /// Advance to the next page, with wraparound
    ShowNext,
    /// Step back to the previous page, with wraparound
    ShowPrevious,
}

impl PageAction {
    /// Apply the command to the display
    ///
    /// `ShowNext`/`ShowPrevious` never fail; `Show` reports an unknown
    /// identity to the caller, who owns surfacing it.
    pub fn apply<D, const P: usize, const T: usize>(
        &self,
        display: &mut Display<D, P, T>,
    ) -> Result<(), NavError> {
        match self {
            PageAction::Show(source) => display.show(source.resolve()),
            PageAction::ShowNext => {
                display.show_next();
                Ok(())
            }
            PageAction::ShowPrevious => {
                display.show_previous();
                Ok(())
            }
        }
    }
}

/// A condition the automation layer can query
#[derive(Debug, Clone, Copy)]
pub enum PageCondition {
    /// Whether the given page is currently active
    IsDisplaying(PageId),
}

impl PageCondition {
    /// Evaluate the condition against the display
    pub fn evaluate<D, const P: usize, const T: usize>(&self, display: &Display<D, P, T>) -> bool {
        match self {
            PageCondition::IsDisplaying(id) => display.is_displaying(*id),
        }
    }
}
