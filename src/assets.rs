//! Bundled stylesheet and fallback icon

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::{fs, path::Path};

const APP: &str = include_str!("../assets/app.css");
const GHOST_ICON: &str = include_str!("../assets/ghost-icon.svg");

/// Path of the global stylesheet relative to the site root.
pub const STYLESHEET_PATH: &str = "assets/app.css";

/// Edge length in pixels of the bundled fallback icon.
pub const FALLBACK_ICON_SIZE: u32 = 30;

/// Writes bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::write(assets_dir.join("app.css"), APP).context("Failed to write CSS asset: app.css")?;
    Ok(())
}

/// Fixed size image shown in place of a missing site logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackIcon {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl FallbackIcon {
    /// Returns the bundled icon embedded as a base64 `data:` URI.
    ///
    /// Embedding keeps every generated page self-contained regardless of
    /// where the output directory is served from.
    pub fn bundled() -> Self {
        Self {
            src: format!("data:image/svg+xml;base64,{}", STANDARD.encode(GHOST_ICON)),
            width: FALLBACK_ICON_SIZE,
            height: FALLBACK_ICON_SIZE,
        }
    }
}
