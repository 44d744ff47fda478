//! Startup configuration.

use std::path::PathBuf;

use glam::Vec3;

use crate::error::{InitError, Result};

/// Size and title of the main window. Fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    width: u32,
    height: u32,
    title: String,
}

impl WindowConfig {
    /// Creates a window configuration, rejecting zero dimensions.
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(InitError::InvalidWindowSize { width, height });
        }
        Ok(Self {
            width,
            height,
            title: title.into(),
        })
    }

    /// Window width in logical pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Window height in logical pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            title: "GuiBase Example".to_owned(),
        }
    }
}

/// Location and size of the optional custom font.
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    /// Path to a TrueType/OpenType file, relative to the working directory.
    pub path: PathBuf,
    /// Font size in points.
    pub size_points: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./assets/fonts/font.ttf"),
            size_points: 30.0,
        }
    }
}

/// Global configuration options for guibase.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Main window configuration.
    pub window: WindowConfig,

    /// Custom font configuration.
    pub font: FontConfig,

    /// Framebuffer clear color (RGB, gamma space). Alpha is always 1.
    pub background_color: Vec3,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            font: FontConfig::default(),
            background_color: Vec3::new(0.1, 0.1, 0.1),
        }
    }
}

impl Options {
    /// Background color as RGBA, fully opaque.
    pub fn clear_color(&self) -> [f32; 4] {
        self.background_color.extend(1.0).to_array()
    }
}
