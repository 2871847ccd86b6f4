//! Static asset bundling

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

use crate::site::Site;
use crate::theme::ThemeTokens;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const INFO_PANEL: &str = include_str!("../assets/components/info-panel.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");
const THEME_TOGGLE: &str = include_str!("../assets/components/theme-toggle.css");

const LOGO_SVG: &str = include_str!("../assets/logo.svg");

/// Stylesheet path referenced by generated pages.
pub const STYLESHEET: &str = "assets/site.css";

/// Bundled logo path referenced by generated pages.
pub const LOGO_PATH: &str = "assets/logo.svg";

/// Headers file name understood by common static hosts.
pub const HEADERS_FILE: &str = "_headers";

/// Returns the complete stylesheet: theme tokens first, then components.
pub fn stylesheet() -> String {
    let tokens = ThemeTokens::css();
    [
        tokens.as_str(),
        BASE,
        LAYOUT,
        NAV,
        INFO_PANEL,
        FOOTER,
        THEME_TOGGLE,
    ]
    .join("\n")
}

/// Writes bundled CSS to the assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    let path = assets_dir.join("site.css");
    fs::write(&path, stylesheet())
        .with_context(|| format!("Failed to write CSS asset: {}", path.display()))
}

/// Where the logo image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    /// Logo shipped with the crate, written next to the stylesheet.
    Bundled,
    /// Remote URL or data URI, referenced as-is.
    Remote(String),
    /// Local file embedded as a base64 data URI.
    Inline(String),
}

impl Logo {
    /// Resolves logo from site identity
    ///
    /// URLs and data URIs pass through untouched. Anything else is treated
    /// as a path relative to the site file and inlined.
    ///
    /// # Errors
    ///
    /// Returns error if a local logo file cannot be read.
    pub fn resolve(site: &Site) -> Result<Self> {
        let Some(source) = site.identity.logo.as_deref() else {
            return Ok(Self::Bundled);
        };

        if is_remote(source) {
            return Ok(Self::Remote(source.to_string()));
        }

        let path = site.resolve_path(source);
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read logo: {}", path.display()))?;
        Ok(Self::Inline(data_uri(&path, &bytes)))
    }

    /// Image source attribute value.
    pub fn src(&self) -> &str {
        match self {
            Self::Bundled => LOGO_PATH,
            Self::Remote(url) | Self::Inline(url) => url,
        }
    }

    /// Writes the bundled logo when it is in use
    pub fn write_asset(&self, assets_dir: &Path) -> Result<()> {
        if *self == Self::Bundled {
            let path = assets_dir.join("logo.svg");
            fs::write(&path, LOGO_SVG)
                .with_context(|| format!("Failed to write logo: {}", path.display()))?;
        }
        Ok(())
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("https://") || source.starts_with("http://") || source.starts_with("data:")
}

/// Encodes file contents as a data URI, picking MIME type from extension
fn data_uri(path: &Path, bytes: &[u8]) -> String {
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Writes the `_headers` file carrying the content revalidation hint
pub fn write_headers(output_dir: &Path, site: &Site) -> Result<()> {
    let path = output_dir.join(HEADERS_FILE);
    let body = format!("/*\n  Cache-Control: {}\n", site.cache_control());
    fs::write(&path, body)
        .with_context(|| format!("Failed to write headers file: {}", path.display()))
}
