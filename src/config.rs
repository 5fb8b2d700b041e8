//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The file controls
//! how the page looks and behaves (brand colors, gallery layout, number
//! formatting, lightbox labels); the page copy itself lives in
//! `content.toml` (see [`crate::content`]).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [brand]
//! accent = "#FF5E17"        # Buttons, check marks
//! dark = "#262216"          # Headings, dark sections
//! light_bg = "#F5F4EE"      # Page gradient end
//! whatsapp = "#25D366"      # Floating WhatsApp button
//!
//! [gallery]
//! tile_count = 8            # Tiles shown when a gallery has no photos yet
//! fallback = "/assets/seo/og.jpg"
//!
//! [locale]
//! lang = "ru"
//! group_separator = "\u00A0"
//! decimal_separator = ","
//! currency_suffix = "\u00A0₽"
//! area_suffix = "\u00A0м²"
//!
//! [lightbox]
//! close_label = "Закрыть"
//! prev_label = "Предыдущее фото"
//! next_label = "Следующее фото"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand palette.
    pub brand: BrandConfig,
    /// Gallery grid layout and fallback image.
    pub gallery: GalleryConfig,
    /// Number formatting and document language.
    pub locale: LocaleConfig,
    /// Accessible labels of the lightbox controls.
    pub lightbox: LightboxConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("brand.accent", &self.brand.accent),
            ("brand.dark", &self.brand.dark),
            ("brand.light_bg", &self.brand.light_bg),
            ("brand.whatsapp", &self.brand.whatsapp),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a #rgb or #rrggbb color, got {value:?}"
                )));
            }
        }
        if self.gallery.tile_count == 0 {
            return Err(ConfigError::Validation(
                "gallery.tile_count must be at least 1".into(),
            ));
        }
        if self.gallery.fallback.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.fallback must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        })
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    pub accent: String,
    pub dark: String,
    pub light_bg: String,
    pub whatsapp: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            accent: "#FF5E17".to_string(),
            dark: "#262216".to_string(),
            light_bg: "#F5F4EE".to_string(),
            whatsapp: "#25D366".to_string(),
        }
    }
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Tiles rendered when a gallery has no images.
    pub tile_count: usize,
    /// Image shown for missing photos and logos.
    pub fallback: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            tile_count: crate::gallery::DEFAULT_TILE_COUNT,
            fallback: "/assets/seo/og.jpg".to_string(),
        }
    }
}

/// Number formatting conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocaleConfig {
    /// `lang` attribute of the document.
    pub lang: String,
    /// Thousands separator.
    pub group_separator: String,
    pub decimal_separator: String,
    /// Appended to prices, separator included.
    pub currency_suffix: String,
    /// Appended to floor areas, separator included.
    pub area_suffix: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            lang: "ru".to_string(),
            group_separator: "\u{a0}".to_string(),
            decimal_separator: ",".to_string(),
            currency_suffix: "\u{a0}₽".to_string(),
            area_suffix: "\u{a0}м²".to_string(),
        }
    }
}

/// Labels of the lightbox controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxConfig {
    pub close_label: String,
    pub prev_label: String,
    pub next_label: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            close_label: "Закрыть".to_string(),
            prev_label: "Предыдущее фото".to_string(),
            next_label: "Следующее фото".to_string(),
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load `config.toml` from the given directory and validate it.
///
/// A missing file yields the defaults. A sparse file overrides only the keys
/// it names: every section and field falls back to its `Default`.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        toml::from_str(&fs::read_to_string(&config_path)?)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Configuration
# ==================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.
#
# Page copy (houses, contacts, FAQ...) lives in content.toml;
# run `settlement-site gen-content` for a starting point.

# ---------------------------------------------------------------------------
# Brand palette (#rgb or #rrggbb)
# ---------------------------------------------------------------------------
[brand]
accent = "#FF5E17"        # Buttons, check marks
dark = "#262216"          # Headings, dark sections
light_bg = "#F5F4EE"      # Page background gradient end
whatsapp = "#25D366"      # Floating WhatsApp button

# ---------------------------------------------------------------------------
# Galleries
# ---------------------------------------------------------------------------
[gallery]
# Number of placeholder tiles shown while a gallery has no photos.
tile_count = 8

# Shown instead of any photo or logo that fails to load.
fallback = "/assets/seo/og.jpg"

# ---------------------------------------------------------------------------
# Number formatting
# ---------------------------------------------------------------------------
[locale]
lang = "ru"
group_separator = "\u00A0"        # 11 900 000
decimal_separator = ","           # 158,3
currency_suffix = "\u00A0₽"
area_suffix = "\u00A0м²"

# ---------------------------------------------------------------------------
# Lightbox control labels (screen readers)
# ---------------------------------------------------------------------------
[lightbox]
close_label = "Закрыть"
prev_label = "Предыдущее фото"
next_label = "Следующее фото"
"##
}

/// Generate CSS custom properties from the brand palette.
pub fn generate_brand_css(brand: &BrandConfig) -> String {
    format!(
        r#":root {{
    --brand-accent: {accent};
    --brand-dark: {dark};
    --brand-light-bg: {light_bg};
    --brand-whatsapp: {whatsapp};
}}"#,
        accent = brand.accent,
        dark = brand.dark,
        light_bg = brand.light_bg,
        whatsapp = brand.whatsapp,
    )
}
