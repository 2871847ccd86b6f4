//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing site and content files into temporary
//! directories and for locating markup in rendered pages.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Site description used by workflow tests.
pub const SITE_TOML: &str = r#"
revalidate = 900

[metadata]
title = "Field Notes"
description = "Notes and essays from the field."
base_url = "https://notes.example.com"

[main_menu]
home = "/"
essays = "/essays"
about = "/about"

[content_menu]
categories = "/essays/categories"
tags = "/essays/tags"

[identity]
owner = "Field Co"
owner_url = "https://field.example.com"
years = "2022-present"
cta_label = "Subscribe"
cta_href = "/subscribe"
"#;

/// Creates temporary directory holding `site.toml`.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_site_dir(source: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "site.toml", source)?;
    Ok(dir)
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Returns the substring of `html` starting at the first element carrying
/// `class` and ending at the next occurrence of `end`.
pub fn section<'a>(html: &'a str, class: &str, end: &str) -> &'a str {
    let start = html
        .find(&format!(r#"class="{}"#, class))
        .unwrap_or_else(|| panic!("Missing element with class {}", class));
    let rest = &html[start..];
    let stop = rest.find(end).unwrap_or(rest.len());
    &rest[..stop]
}

/// Extracts visible text of every `<a>` element in `html`, in order.
pub fn link_texts(html: &str) -> Vec<String> {
    let mut texts = Vec::new();
    let mut rest = html;
    while let Some(open) = rest.find("<a ") {
        rest = &rest[open..];
        let Some(gt) = rest.find('>') else { break };
        let Some(close) = rest.find("</a>") else { break };
        texts.push(rest[gt + 1..close].to_string());
        rest = &rest[close + 4..];
    }
    texts
}
