//! Board-agnostic page navigation engine for small displays
//!
//! This crate contains the runtime that cycles a resource-constrained
//! display through an ordered set of pages:
//!
//! - Page model and immutable page registry
//! - Cursor with wraparound navigation (show / next / previous)
//! - Synchronous change triggers filtered by from/to page
//! - Closed set of automation commands (show, next, previous, condition)
//! - Configuration types and eager default resolution
//! - The single per-frame render entry point
//!
//! All state lives in fixed-capacity collections; nothing allocates,
//! blocks, or performs I/O after setup. The frame target is abstracted
//! behind [`DisplayBackend`]; concrete targets live in `folio-display`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod action;
pub mod backend;
pub mod config;
pub mod display;
pub mod navigator;
pub mod page;
pub mod testcard;
pub mod trigger;

pub use action::{PageAction, PageCondition, PageIdSource};
pub use backend::{DisplayBackend, DisplayError};
pub use config::{AutoClear, ConfigError, DisplayBuilder, DisplaySettings, Rotation};
pub use display::Display;
pub use navigator::{NavError, PageNavigator};
pub use page::{Page, PageId, PageRegistry, RenderFn};
pub use trigger::{Notifier, OnPageChangeTrigger, PageFilter, TriggerFn};
