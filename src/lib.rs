//! Themed page shell for headless CMS content.

pub mod assets;
pub mod components;
mod config;
pub mod content;
mod generator;
pub mod menu;
pub mod site;
pub mod theme;

pub use assets::Logo;
pub use config::Config;
pub use generator::{BuildOptions, BuildReport, build_site, render_page};
pub use menu::{Menu, MenuEntry, capitalize_first};
pub use site::{Identity, Metadata, Profile, Site};
pub use theme::{Appearance, MemoryStore, PreferenceStore, ThemeController, ThemePreference, ThemeTokens};
