//! Content slot rendering.
//!
//! Content reaches the shell already resolved by an external fetch layer.
//! Markdown is rendered with comrak's GitHub Flavored Markdown extensions;
//! anything else is trusted HTML and inserted verbatim.

use anyhow::{Context, Result};
use comrak::Options;
use maud::{Markup, PreEscaped};
use std::fs;
use std::path::Path;

/// Renders markdown with GitHub Flavored Markdown extensions.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GFM options.
    ///
    /// Tables, strikethrough, autolinks, task lists, footnotes and
    /// description lists are enabled together with smart punctuation. Raw
    /// HTML passes through since CMS content is trusted.
    pub fn new() -> Self {
        let mut options = Options::default();

        // GFM
        let gfm = &mut options.extension;
        gfm.strikethrough = true;
        gfm.table = true;
        gfm.autolink = true;
        gfm.tasklist = true;
        gfm.footnotes = true;
        gfm.description_lists = true;

        options.parse.smart = true;
        // CMS output may embed HTML blocks
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown source to an HTML string.
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Source format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Markdown,
    Html,
}

impl ContentKind {
    /// Detects format from file extension; unknown extensions are HTML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("md" | "markdown") => Self::Markdown,
            _ => Self::Html,
        }
    }
}

/// Renders content source into markup for the content slot.
pub fn render(source: &str, kind: ContentKind) -> Markup {
    match kind {
        ContentKind::Markdown => PreEscaped(MarkdownRenderer::new().render(source)),
        ContentKind::Html => PreEscaped(source.to_string()),
    }
}

/// Reads and renders a content file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF8.
pub fn load(path: impl AsRef<Path>) -> Result<Markup> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    Ok(render(&source, ContentKind::from_path(path)))
}
