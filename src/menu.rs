//! Ordered navigation link sets.

use anyhow::{Result, bail};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// Single navigation link: display label and destination URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    label: String,
    href: String,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Label as displayed in navigation, see [`capitalize_first`].
    pub fn display_label(&self) -> String {
        capitalize_first(&self.label)
    }
}

/// Ordered menu with unique labels.
///
/// Iteration order is insertion order, which is also display order. The
/// constructor rejects duplicate labels so callers never have to decide
/// which of two same-named links wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndexMap<String, String>")]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Builds menu from entries in display order.
    ///
    /// # Errors
    ///
    /// Returns error if two entries share a label.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.label.as_str()) {
                bail!("Duplicate menu label: {}", entry.label);
            }
        }
        Ok(Self { entries })
    }

    /// Builds menu from `(label, href)` pairs in display order.
    ///
    /// # Errors
    ///
    /// Returns error if two pairs share a label.
    pub fn from_pairs<L, H>(pairs: impl IntoIterator<Item = (L, H)>) -> Result<Self>
    where
        L: Into<String>,
        H: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(label, href)| MenuEntry::new(label, href))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Main site menu shipped with the starter.
    pub fn default_main() -> Self {
        Self {
            entries: vec![
                MenuEntry::new("home", "https://9d8.dev"),
                MenuEntry::new("blog", "/posts"),
                MenuEntry::new("about", "/pages/about"),
            ],
        }
    }

    /// Content menu shipped with the starter.
    pub fn default_content() -> Self {
        Self {
            entries: vec![
                MenuEntry::new("categories", "/posts/categories"),
                MenuEntry::new("tags", "/posts/tags"),
                MenuEntry::new("authors", "/posts/authors"),
            ],
        }
    }
}

impl TryFrom<IndexMap<String, String>> for Menu {
    type Error = anyhow::Error;

    fn try_from(map: IndexMap<String, String>) -> Result<Self> {
        Self::from_pairs(map)
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Uppercases the first character and leaves the rest untouched.
///
/// Multi-word and already capitalized labels pass through as-is after the
/// first character: "about us" becomes "About us", "FAQ" stays "FAQ".
pub fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_lowercase() {
        assert_eq!(capitalize_first("about"), "About");
    }

    #[test]
    fn test_capitalize_first_multi_word() {
        // Only the first character changes
        assert_eq!(capitalize_first("about us"), "About us");
        assert_eq!(capitalize_first("blog posts AND more"), "Blog posts AND more");
    }

    #[test]
    fn test_capitalize_first_already_capitalized() {
        assert_eq!(capitalize_first("FAQ"), "FAQ");
        assert_eq!(capitalize_first("About"), "About");
    }

    #[test]
    fn test_capitalize_first_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_non_ascii() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first("ßeta"), "SSeta");
    }

    #[test]
    fn test_menu_preserves_insertion_order() {
        // Arrange
        let pairs = [("zeta", "/z"), ("alpha", "/a"), ("mid", "/m")];

        // Act
        let menu = Menu::from_pairs(pairs).expect("Unique labels should build");

        // Assert
        let labels: Vec<&str> = menu.iter().map(MenuEntry::label).collect();
        assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_menu_rejects_duplicate_labels() {
        // Arrange
        let entries = vec![
            MenuEntry::new("blog", "/posts"),
            MenuEntry::new("blog", "/other"),
        ];

        // Act
        let result = Menu::new(entries);

        // Assert
        let err = result.expect_err("Duplicate labels should be rejected");
        assert!(err.to_string().contains("blog"));
    }

    #[test]
    fn test_menu_allows_duplicate_hrefs() {
        let menu = Menu::from_pairs([("home", "/"), ("start", "/")]);
        assert!(menu.is_ok());
    }

    #[test]
    fn test_menu_empty() {
        let menu = Menu::default();
        assert!(menu.is_empty());
        assert_eq!(menu.len(), 0);
        assert_eq!(menu.iter().count(), 0);
    }

    #[test]
    fn test_menu_deserializes_in_document_order() {
        // Arrange
        #[derive(Deserialize)]
        struct Doc {
            menu: Menu,
        }
        let source = "[menu]\nzoo = \"/zoo\"\nant = \"/ant\"\nmoth = \"/moth\"\n";

        // Act
        let doc: Doc = toml::from_str(source).expect("Valid TOML should parse");

        // Assert
        let hrefs: Vec<&str> = doc.menu.iter().map(MenuEntry::href).collect();
        assert_eq!(hrefs, vec!["/zoo", "/ant", "/moth"]);
    }

    #[test]
    fn test_display_label() {
        let entry = MenuEntry::new("categories", "/posts/categories");
        assert_eq!(entry.display_label(), "Categories");
        assert_eq!(entry.label(), "categories");
    }
}
