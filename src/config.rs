//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::site::Site;
use crate::theme::ThemePreference;

/// Command line configuration for sitechrome.
#[derive(Debug, Clone, Parser)]
#[command(name = "sitechrome", version, about, long_about = None)]
pub struct Config {
    /// Content file placed in the page (Markdown or HTML)
    pub content: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site description file (TOML)
    #[arg(short, long)]
    pub site: Option<PathBuf>,

    /// Initial theme preference (light, dark, system)
    #[arg(long, default_value = "system")]
    pub theme: ThemePreference,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content or site file does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(content) = &self.content
            && !content.is_file()
        {
            bail!("Content file does not exist: {}", content.display());
        }

        if let Some(site) = &self.site
            && !site.is_file()
        {
            bail!("Site file does not exist: {}", site.display());
        }

        Ok(())
    }

    /// Loads site description, falling back to defaults without a file.
    ///
    /// # Errors
    ///
    /// Returns error if the site file cannot be read or parsed.
    pub fn load_site(&self) -> Result<Site> {
        match &self.site {
            Some(path) => Site::load(path),
            None => Ok(Site::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            content: None,
            output: PathBuf::from("dist"),
            site: None,
            theme: ThemePreference::System,
            no_open: true,
        }
    }

    #[test]
    fn test_parse_defaults() {
        // Arrange & Act
        let config = Config::try_parse_from(["sitechrome"]).expect("No arguments should parse");

        // Assert
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.theme, ThemePreference::System);
        assert!(config.content.is_none());
        assert!(!config.no_open);
    }

    #[test]
    fn test_parse_all_arguments() {
        // Arrange & Act
        let config = Config::try_parse_from([
            "sitechrome",
            "post.md",
            "-o",
            "public",
            "--site",
            "site.toml",
            "--theme",
            "dark",
            "--no-open",
        ])
        .expect("Arguments should parse");

        // Assert
        assert_eq!(config.content, Some(PathBuf::from("post.md")));
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.site, Some(PathBuf::from("site.toml")));
        assert_eq!(config.theme, ThemePreference::Dark);
        assert!(config.no_open);
    }

    #[test]
    fn test_parse_rejects_unknown_theme() {
        let result = Config::try_parse_from(["sitechrome", "--theme", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_without_files() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_content() {
        // Arrange
        let config = Config {
            content: Some(PathBuf::from("does/not/exist.md")),
            ..config()
        };

        // Act
        let result = config.validate();

        // Assert
        let err = result.expect_err("Missing content should fail validation");
        assert!(err.to_string().contains("exist.md"));
    }

    #[test]
    fn test_validate_missing_site() {
        let config = Config {
            site: Some(PathBuf::from("does/not/site.toml")),
            ..config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_site_defaults() {
        let site = config().load_site().expect("Defaults should load");
        assert_eq!(site, Site::default());
    }
}
