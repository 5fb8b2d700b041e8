//! The loaded site: configuration plus content, built once at startup.
//!
//! Renderers take `&Site`; nothing reads configuration from globals.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, ContentError, SiteContent};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

#[derive(Debug, Clone, Default)]
pub struct Site {
    pub config: SiteConfig,
    pub content: SiteContent,
}

impl Site {
    /// Load `config.toml` and `content.toml` from the source directory.
    pub fn load(source: &Path) -> Result<Self, SiteError> {
        Ok(Self {
            config: config::load_config(source)?,
            content: content::load_content(source)?,
        })
    }

    /// Stock config and stock content.
    pub fn stock() -> Result<Self, SiteError> {
        Ok(Self {
            config: SiteConfig::default(),
            content: content::parse_content(content::stock_content_toml())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_empty_dir_gives_stock_site() {
        let tmp = TempDir::new().unwrap();
        let site = Site::load(tmp.path()).unwrap();
        assert_eq!(site.config.gallery.tile_count, 8);
        assert_eq!(site.content.houses.items.len(), 3);
    }

    #[test]
    fn load_fixtures() {
        let tmp = setup_fixtures();
        let site = Site::load(tmp.path()).unwrap();
        assert_eq!(site.config.gallery.tile_count, 4);
        assert_eq!(site.content.houses.items.len(), 2);
    }

    #[test]
    fn config_errors_are_wrapped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[brand]\naccent = \"orange\"\n").unwrap();
        assert!(matches!(
            Site::load(tmp.path()),
            Err(SiteError::Config(ConfigError::Validation(_)))
        ));
    }

    #[test]
    fn content_errors_are_wrapped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("content.toml"), "[[stats]]\nlabel = 1\n").unwrap();
        assert!(matches!(
            Site::load(tmp.path()),
            Err(SiteError::Content(ContentError::Toml(_)))
        ));
    }

    #[test]
    fn stock_site_loads() {
        let site = Site::stock().unwrap();
        assert_eq!(site.content.site.place, "Карповский");
    }
}
