//! Rendering backend for guibase.
//!
//! This crate owns the GPU side of the window: the wgpu instance, device and
//! surface, the per-frame clear pass, and presentation. Drawing the GUI on
//! top of the cleared frame is left to the UI crate.

#![allow(clippy::missing_errors_doc)]

pub mod engine;
pub mod error;

pub use engine::{Frame, RenderEngine};
pub use error::{RenderError, RenderResult};
