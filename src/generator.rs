//! Site output generation

use anyhow::{Context, Result};
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::{self, Logo};
use crate::components::layout::{ShellData, root_shell};
use crate::content;
use crate::site::Site;
use crate::theme::{Appearance, MemoryStore, ThemeController, ThemePreference};

/// Inputs for one build
#[derive(Debug, Clone)]
pub struct BuildOptions<'a> {
    pub output: &'a Path,
    /// Markdown or HTML file for the content slot; empty slot when absent.
    pub content: Option<&'a Path>,
    /// Preference the page starts with before a visitor chooses one.
    pub theme: ThemePreference,
}

/// Paths written by a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub stylesheet: PathBuf,
    pub headers: PathBuf,
}

/// Renders the shell page for already resolved content
///
/// The theme controller is seeded with `theme` as the persisted choice. No
/// operating system is present at build time, so `system` resolves on the
/// client.
pub fn render_page(site: &Site, logo: &Logo, theme: ThemePreference, content: Markup) -> Markup {
    let controller = ThemeController::init(MemoryStore::new(Some(theme)), Appearance::default());

    root_shell(
        ShellData {
            site,
            theme: &controller,
            logo_src: logo.src(),
            stylesheets: &[assets::STYLESHEET],
            nav_slot: None,
        },
        content,
    )
}

/// Builds the site into the output directory
///
/// Writes `index.html`, `assets/site.css`, the bundled logo when used, and
/// the `_headers` file.
///
/// # Errors
///
/// Returns error if content or logo cannot be read, or output cannot be
/// written.
pub fn build_site(site: &Site, options: &BuildOptions<'_>) -> Result<BuildReport> {
    let output = options.output;
    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;

    let logo = Logo::resolve(site).context("Failed to resolve logo")?;
    debug!(src = %logo.src(), "resolved logo");

    let body = match options.content {
        Some(path) => {
            info!(path = %path.display(), "rendering content");
            content::load(path)?
        }
        None => html! {},
    };

    let page = render_page(site, &logo, options.theme, body);
    let index = output.join("index.html");
    fs::write(&index, page.into_string())
        .with_context(|| format!("Failed to write index page to {}", index.display()))?;
    info!(path = %index.display(), "generated page");

    assets::write_css_assets(&assets_dir)?;
    logo.write_asset(&assets_dir)?;

    assets::write_headers(output, site)?;
    info!(
        revalidate_secs = site.revalidate_interval().as_secs(),
        "wrote revalidation headers"
    );

    Ok(BuildReport {
        index,
        stylesheet: assets_dir.join("site.css"),
        headers: output.join(assets::HEADERS_FILE),
    })
}
