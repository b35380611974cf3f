//! Reference frame targets for the folio display runtime
//!
//! This crate provides:
//! - `FrameBuffer`: a monochrome in-memory pixel buffer implementing
//!   `DisplayBackend`, with dirty tracking for flush scheduling
//! - `Rotated`: a wrapper applying the configured rotation as a fixed
//!   coordinate transform in front of any backend
//!
//! # Architecture
//!
//! Hardware drivers implement `DisplayBackend` with their panel-specific
//! code; the engine in `folio-core` renders through the trait without
//! caring what is behind it. The types here are the host-testable
//! implementations: a plain buffer, and the rotation decorator a driver
//! composes in front of its panel.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod framebuffer;
pub mod rotated;

pub use framebuffer::FrameBuffer;
pub use rotated::Rotated;
