//! Optional custom font loading.

use std::sync::Arc;

use egui::{Context, FontData, FontDefinitions, FontFamily, FontId};
use guibase_core::{AssetError, FontConfig};

/// Name under which the custom font is registered with egui.
pub const CUSTOM_FONT_NAME: &str = "guibase-custom";

/// Leading bytes of the font containers egui can parse.
const FONT_SIGNATURES: [&[u8]; 5] = [
    &[0x00, 0x01, 0x00, 0x00],
    b"OTTO",
    b"true",
    b"typ1",
    b"ttcf",
];

/// Raw font bytes read from disk, not yet handed to egui.
#[derive(Debug, Clone)]
pub struct LoadedFont {
    data: Vec<u8>,
    size_points: f32,
}

/// A font registered with the egui context.
#[derive(Debug, Clone, PartialEq)]
pub struct FontHandle {
    family: FontFamily,
    size_points: f32,
}

impl FontHandle {
    pub fn font_id(&self) -> FontId {
        FontId::new(self.size_points, self.family.clone())
    }
}

/// Runs `build` with `font` overriding every text style of `ctx`, then puts
/// the previous style back. With no font, `build` runs unchanged.
///
/// Every `Ui` created inside `build` (panels, window title bars, menu
/// popups) copies the context style, so the override reaches all of them
/// and none created after this call.
pub fn with_font<R>(
    ctx: &Context,
    font: Option<&FontHandle>,
    build: impl FnOnce(&Context) -> R,
) -> R {
    let Some(font) = font else {
        return build(ctx);
    };

    let saved = ctx.style();
    ctx.style_mut(|style| style.override_font_id = Some(font.font_id()));
    let result = build(ctx);
    ctx.set_style(saved);
    result
}

/// Reads the font named by `config`.
pub fn load_font(config: &FontConfig) -> Result<LoadedFont, AssetError> {
    let data = std::fs::read(&config.path).map_err(|source| AssetError::FontRead {
        path: config.path.clone(),
        source,
    })?;

    if !FONT_SIGNATURES.iter().any(|sig| data.starts_with(sig)) {
        return Err(AssetError::FontInvalid {
            path: config.path.clone(),
        });
    }

    Ok(LoadedFont {
        data,
        size_points: config.size_points,
    })
}

/// Builds egui font definitions containing `font` in its own family. The
/// default fonts stay behind it as glyph fallbacks.
pub fn font_definitions(font: LoadedFont) -> (FontDefinitions, FontHandle) {
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(
        CUSTOM_FONT_NAME.to_owned(),
        Arc::new(FontData::from_owned(font.data)),
    );

    let family = FontFamily::Name(CUSTOM_FONT_NAME.into());
    let mut chain = vec![CUSTOM_FONT_NAME.to_owned()];
    if let Some(fallbacks) = fonts.families.get(&FontFamily::Proportional) {
        chain.extend(fallbacks.iter().cloned());
    }
    fonts.families.insert(family.clone(), chain);

    (
        fonts,
        FontHandle {
            family,
            size_points: font.size_points,
        },
    )
}

/// Installs `font` into `ctx`. The font atlas is rebuilt at the start of
/// the next frame.
pub fn install_font(ctx: &Context, font: LoadedFont) -> FontHandle {
    let (fonts, handle) = font_definitions(font);
    ctx.set_fonts(fonts);
    log::debug!("Installed custom font at {} pt", handle.size_points);
    handle
}
