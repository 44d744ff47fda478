//! Core types for guibase.
//!
//! This crate holds the pieces of the application that do not touch the
//! window system or the GPU:
//! - [`Options`], [`WindowConfig`] and [`FontConfig`] startup configuration
//! - [`Lifecycle`] and [`ExitReason`], the two-state run/terminate machine
//! - [`InitError`] and [`AssetError`], the fatal and recoverable error kinds

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod lifecycle;
pub mod options;

pub use error::{AssetError, InitError, Result};
pub use lifecycle::{ExitReason, Lifecycle};
pub use options::{FontConfig, Options, WindowConfig};
