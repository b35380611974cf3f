//! Display configuration types
//!
//! Everything the setup step feeds the runtime: rotation, the tri-state
//! auto-clear flag and its one-time resolution, the persistable settings
//! subset, and the builder that assembles a [`Display`].
//!
//! Defaults are resolved eagerly here; per-frame code only ever sees
//! concrete values.

use heapless::Vec;

use crate::display::Display;
use crate::navigator::PageNavigator;
use crate::page::{Page, PageId, PageRegistry, RenderFn};
use crate::trigger::{Notifier, OnPageChangeTrigger, PageFilter, TriggerFn};

/// Configuration errors
///
/// All of these abort setup before the first frame is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two pages share an identity
    DuplicatePageId(PageId),
    /// Both a page list and a top-level render lambda were configured
    ConflictingRenderSource,
    /// A page list was configured but contains no pages
    EmptyPageList,
    /// Rotation is not one of 0, 90, 180, 270 degrees
    InvalidRotation(u16),
    /// A trigger filter names a page identity absent from the registry
    UnknownTriggerPage(PageId),
    /// More pages or triggers than the compile-time capacity
    CapacityExceeded,
}

/// Display rotation, applied by the driver as a fixed transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Parse a rotation from whole degrees
    pub fn from_degrees(degrees: u16) -> Result<Self, ConfigError> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(ConfigError::InvalidRotation(other)),
        }
    }

    /// Rotation in whole degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

/// Auto-clear flag as configured
///
/// `Unspecified` defers to the render source: it resolves to enabled
/// exactly when pages or a top-level lambda were configured. Resolution
/// happens once, in [`DisplayBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoClear {
    #[default]
    Unspecified,
    Enabled,
    Disabled,
}

impl AutoClear {
    /// Resolve to the concrete per-frame boolean
    pub const fn resolve(self, has_render_source: bool) -> bool {
        match self {
            AutoClear::Unspecified => has_render_source,
            AutoClear::Enabled => true,
            AutoClear::Disabled => false,
        }
    }
}

/// Persistable plain-data display settings
///
/// The subset of the configuration that can be stored and restored;
/// render callbacks and triggers are wired separately at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplaySettings {
    /// Display rotation
    pub rotation: Rotation,
    /// Auto-clear flag, pre-resolution
    pub auto_clear: AutoClear,
    /// Diagnostic test-card override
    pub show_test_card: bool,
}

/// Builder for the display runtime
///
/// Collects the one-time setup inputs and validates them as a whole in
/// [`build`](Self::build): page/lambda exclusivity, duplicate identities
/// and capacity bounds all surface there, before any frame is rendered.
pub struct DisplayBuilder<D, const P: usize, const T: usize> {
    pages: Vec<Page<D>, P>,
    pages_configured: bool,
    lambda: Option<RenderFn<D>>,
    triggers: Vec<OnPageChangeTrigger, T>,
    settings: DisplaySettings,
    overflowed: bool,
}

impl<D, const P: usize, const T: usize> DisplayBuilder<D, P, T> {
    /// Start an empty configuration
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            pages_configured: false,
            lambda: None,
            triggers: Vec::new(),
            settings: DisplaySettings::default(),
            overflowed: false,
        }
    }

    /// Configure the ordered page list
    ///
    /// Mutually exclusive with [`lambda`](Self::lambda). Order defines
    /// next/previous adjacency.
    pub fn pages(mut self, pages: &[(PageId, RenderFn<D>)]) -> Self {
        self.pages_configured = true;
        for &(id, render) in pages {
            if self.pages.push(Page::new(id, render)).is_err() {
                self.overflowed = true;
            }
        }
        self
    }

    /// Configure a single top-level render lambda instead of pages
    pub fn lambda(mut self, lambda: RenderFn<D>) -> Self {
        self.lambda = Some(lambda);
        self
    }

    /// Set the display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Set the auto-clear flag
    pub fn auto_clear(mut self, auto_clear: AutoClear) -> Self {
        self.settings.auto_clear = auto_clear;
        self
    }

    /// Enable the diagnostic test card
    pub fn show_test_card(mut self, enabled: bool) -> Self {
        self.settings.show_test_card = enabled;
        self
    }

    /// Apply persisted settings wholesale
    pub fn settings(mut self, settings: DisplaySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Register a page-change trigger
    ///
    /// Triggers fire in registration order.
    pub fn on_page_change(mut self, from: PageFilter, to: PageFilter, action: TriggerFn) -> Self {
        if self
            .triggers
            .push(OnPageChangeTrigger::new(from, to, action))
            .is_err()
        {
            self.overflowed = true;
        }
        self
    }

    /// Validate the configuration and produce the runtime
    pub fn build(self) -> Result<Display<D, P, T>, ConfigError> {
        if self.overflowed {
            return Err(ConfigError::CapacityExceeded);
        }
        if self.pages_configured && self.lambda.is_some() {
            return Err(ConfigError::ConflictingRenderSource);
        }
        if self.pages_configured && self.pages.is_empty() {
            return Err(ConfigError::EmptyPageList);
        }

        let has_render_source = self.pages_configured || self.lambda.is_some();
        let auto_clear = self.settings.auto_clear.resolve(has_render_source);

        let registry = if self.pages_configured {
            PageRegistry::new(self.pages)?
        } else {
            PageRegistry::empty()
        };

        let mut notifier = Notifier::new();
        for trigger in self.triggers {
            // A filter naming a page the registry does not hold could
            // never fire; reject it here instead of wiring a dead trigger
            for filter in [trigger.from_filter(), trigger.to_filter()] {
                if let PageFilter::Page(id) = filter {
                    if registry.index_of(id).is_none() {
                        return Err(ConfigError::UnknownTriggerPage(id));
                    }
                }
            }
            notifier.register(trigger)?;
        }

        Ok(Display::new(
            PageNavigator::new(registry, notifier),
            self.lambda,
            auto_clear,
            self.settings.show_test_card,
            self.settings.rotation,
        ))
    }
}

impl<D, const P: usize, const T: usize> Default for DisplayBuilder<D, P, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DisplayError;

    fn noop(_: &mut ()) -> Result<(), DisplayError> {
        Ok(())
    }

    type Builder = DisplayBuilder<(), 4, 4>;

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Ok(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(90), Ok(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(180), Ok(Rotation::Deg180));
        assert_eq!(Rotation::from_degrees(270), Ok(Rotation::Deg270));
        assert_eq!(
            Rotation::from_degrees(45),
            Err(ConfigError::InvalidRotation(45))
        );
        assert_eq!(Rotation::Deg270.degrees(), 270);
    }

    #[test]
    fn test_auto_clear_resolution() {
        // Unspecified defers to whether a render source exists
        assert!(AutoClear::Unspecified.resolve(true));
        assert!(!AutoClear::Unspecified.resolve(false));
        // Explicit values win regardless
        assert!(AutoClear::Enabled.resolve(false));
        assert!(!AutoClear::Disabled.resolve(true));
    }

    #[test]
    fn test_unspecified_resolves_true_with_pages() {
        let display = Builder::new()
            .pages(&[(PageId(1), noop as RenderFn<()>)])
            .build()
            .unwrap();
        assert!(display.auto_clear());
    }

    #[test]
    fn test_unspecified_resolves_false_without_source() {
        let display = Builder::new().build().unwrap();
        assert!(!display.auto_clear());
    }

    #[test]
    fn test_pages_and_lambda_conflict() {
        let err = Builder::new()
            .pages(&[(PageId(1), noop as RenderFn<()>)])
            .lambda(noop)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ConflictingRenderSource);
    }

    #[test]
    fn test_empty_page_list_rejected() {
        let err = Builder::new().pages(&[]).build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyPageList);
    }

    #[test]
    fn test_duplicate_pages_rejected() {
        let err = Builder::new()
            .pages(&[
                (PageId(1), noop as RenderFn<()>),
                (PageId(1), noop as RenderFn<()>),
            ])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicatePageId(PageId(1)));
    }

    #[test]
    fn test_trigger_filter_unknown_page_rejected() {
        let err = Builder::new()
            .pages(&[(PageId(1), noop as RenderFn<()>)])
            .on_page_change(PageFilter::Page(PageId(99)), PageFilter::Any, |_, _| {})
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownTriggerPage(PageId(99)));

        let err = Builder::new()
            .pages(&[(PageId(1), noop as RenderFn<()>)])
            .on_page_change(PageFilter::Any, PageFilter::Page(PageId(7)), |_, _| {})
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownTriggerPage(PageId(7)));
    }

    #[test]
    fn test_trigger_filter_known_page_accepted() {
        let display = Builder::new()
            .pages(&[
                (PageId(1), noop as RenderFn<()>),
                (PageId(2), noop as RenderFn<()>),
            ])
            .on_page_change(PageFilter::Page(PageId(1)), PageFilter::Page(PageId(2)), |_, _| {})
            .build()
            .unwrap();
        assert_eq!(display.page_count(), 2);
    }

    #[test]
    fn test_trigger_filter_without_pages_rejected() {
        // Lambda mode has no registry, so any exact filter is unknown
        let err = Builder::new()
            .lambda(noop)
            .on_page_change(PageFilter::Page(PageId(1)), PageFilter::Any, |_, _| {})
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownTriggerPage(PageId(1)));
    }

    #[test]
    fn test_page_capacity_overflow() {
        let err = DisplayBuilder::<(), 1, 4>::new()
            .pages(&[
                (PageId(1), noop as RenderFn<()>),
                (PageId(2), noop as RenderFn<()>),
            ])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::CapacityExceeded);
    }

    #[test]
    fn test_settings_applied() {
        let display = Builder::new()
            .settings(DisplaySettings {
                rotation: Rotation::Deg180,
                auto_clear: AutoClear::Disabled,
                show_test_card: false,
            })
            .lambda(noop)
            .build()
            .unwrap();
        assert_eq!(display.rotation(), Rotation::Deg180);
        assert!(!display.auto_clear());
    }
}
