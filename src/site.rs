//! Site description loaded from TOML.
//!
//! Every table and key is optional. Missing values fall back to the
//! starter defaults so an empty file still renders a complete shell.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::menu::Menu;

/// Default content revalidation interval in seconds (one hour).
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

/// Page level descriptive record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub base_url: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "WordPress & Next.js Starter by 9d8".to_string(),
            description: "A starter template for Next.js with WordPress as a headless CMS."
                .to_string(),
            base_url: "https://wp.9d8.dev".to_string(),
        }
    }
}

impl Metadata {
    /// Base URL with a trailing slash, suitable for canonical links.
    pub fn canonical_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    fn validate(&self) -> Result<()> {
        let rest = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
            _ => bail!(
                "Base URL must be an absolute http(s) URL: {}",
                self.base_url
            ),
        }
    }
}

/// Owner and call-to-action shown in navigation and footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Identity {
    /// Screen reader text for the navigation brand link.
    pub brand: String,
    /// Screen reader text for the footer brand link.
    pub footer_brand: String,
    pub owner: String,
    pub owner_url: String,
    pub years: String,
    pub cta_label: String,
    pub cta_href: String,
    /// Local SVG file or URL; bundled logo when absent.
    pub logo: Option<String>,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            brand: "next-wp starter".to_string(),
            footer_brand: "brijr/components".to_string(),
            owner: "9d8".to_string(),
            owner_url: "https://9d8.dev".to_string(),
            years: "2024-present".to_string(),
            cta_label: "Get Started".to_string(),
            cta_href: "https://github.com/9d8dev/next-wp".to_string(),
            logo: None,
        }
    }
}

/// Info panel profile card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub url: String,
    pub avatar: String,
    pub tagline: [String; 2],
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Artur Carter".to_string(),
            url: "https://arter.bslthemes.com".to_string(),
            avatar: "https://arter.bslthemes.com/wp-content/uploads/2020/09/face-1.jpg"
                .to_string(),
            tagline: [
                "Front-end Developer".to_string(),
                "Ui/UX Designer".to_string(),
            ],
        }
    }
}

/// Complete, read-only description of the site shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Site {
    pub metadata: Metadata,
    pub main_menu: Menu,
    pub content_menu: Menu,
    /// Seconds an external cache may serve content before refetching.
    pub revalidate: u64,
    pub identity: Identity,
    pub profile: Profile,
    /// Directory the site file was loaded from, for resolving local paths.
    #[serde(skip)]
    root: Option<PathBuf>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            metadata: Metadata::default(),
            main_menu: Menu::default_main(),
            content_menu: Menu::default_content(),
            revalidate: DEFAULT_REVALIDATE_SECS,
            identity: Identity::default(),
            profile: Profile::default(),
            root: None,
        }
    }
}

impl Site {
    /// Parses site description from TOML source.
    ///
    /// # Errors
    ///
    /// Returns error on malformed TOML, duplicate menu labels, or a base URL
    /// that is not absolute.
    pub fn from_toml(source: &str) -> Result<Self> {
        let site: Site = toml::from_str(source).context("Failed to parse site configuration")?;
        site.metadata.validate()?;
        Ok(site)
    }

    /// Loads site description from file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or fails [`Site::from_toml`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site file: {}", path.display()))?;
        let mut site = Self::from_toml(&source)
            .with_context(|| format!("Invalid site file: {}", path.display()))?;
        site.root = path.parent().map(Path::to_path_buf);
        Ok(site)
    }

    pub fn revalidate_interval(&self) -> Duration {
        Duration::from_secs(self.revalidate)
    }

    /// Resolves a path from the site file relative to its directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => PathBuf::from(path),
        }
    }

    /// `Cache-Control` value telling the content cache how long to serve
    /// a page before revalidating it.
    pub fn cache_control(&self) -> String {
        format!(
            "public, s-maxage={}, stale-while-revalidate",
            self.revalidate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuEntry;

    #[test]
    fn test_empty_source_uses_defaults() {
        // Arrange & Act
        let site = Site::from_toml("").expect("Empty configuration should be valid");

        // Assert
        assert_eq!(site, Site::default());
        assert_eq!(
            site.metadata.description,
            "A starter template for Next.js with WordPress as a headless CMS."
        );
        assert_eq!(site.revalidate_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_full_source() {
        // Arrange
        let source = r#"
revalidate = 600

[metadata]
title = "Field Notes"
description = "Notes from the field."
base_url = "https://notes.example.com"

[main_menu]
home = "/"
about = "/about"

[content_menu]
tags = "/tags"

[identity]
owner = "Field Co"
years = "2021-2025"
footer_brand = "Field Co notes"

[profile]
name = "Ada"
tagline = ["Writer", "Editor"]
"#;

        // Act
        let site = Site::from_toml(source).expect("Valid configuration should parse");

        // Assert
        assert_eq!(site.metadata.title, "Field Notes");
        assert_eq!(site.revalidate, 600);
        assert_eq!(
            site.main_menu.entries(),
            &[MenuEntry::new("home", "/"), MenuEntry::new("about", "/about")]
        );
        assert_eq!(site.content_menu.len(), 1);
        assert_eq!(site.identity.owner, "Field Co");
        assert_eq!(site.identity.cta_label, "Get Started", "Unset keys keep defaults");
        assert_eq!(site.identity.brand, "next-wp starter");
        assert_eq!(site.profile.tagline[1], "Editor");
        assert_eq!(site.identity.footer_brand, "Field Co notes");
    }

    #[test]
    fn test_empty_menu_table() {
        let site = Site::from_toml("[main_menu]\n").expect("Empty table should parse");
        assert!(site.main_menu.is_empty());
        assert!(!site.content_menu.is_empty());
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let result = Site::from_toml("[metadata]\nbase_url = \"/relative\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_key() {
        let result = Site::from_toml("[metadata]\ntitel = \"typo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_canonical_url() {
        let mut metadata = Metadata::default();
        assert_eq!(metadata.canonical_url(), "https://wp.9d8.dev/");

        metadata.base_url = "https://example.com/".to_string();
        assert_eq!(metadata.canonical_url(), "https://example.com/");
    }

    #[test]
    fn test_cache_control() {
        let site = Site::default();
        assert_eq!(
            site.cache_control(),
            "public, s-maxage=3600, stale-while-revalidate"
        );
    }

    #[test]
    fn test_resolve_path_without_root() {
        let site = Site::default();
        assert_eq!(site.resolve_path("logo.svg"), PathBuf::from("logo.svg"));
    }
}
