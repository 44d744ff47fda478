//! UI layer for guibase using egui.

pub mod font;
pub mod integration;
pub mod panels;

pub use font::{font_definitions, install_font, load_font, with_font, FontHandle, LoadedFont};
pub use integration::{EguiIntegration, TextureBacklog};
pub use panels::*;
