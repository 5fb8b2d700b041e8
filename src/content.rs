//! Page content: every record the static sections render.
//!
//! Content is read from `content.toml` in the source directory. When the file
//! is absent the stock content (`static/content.toml`, printed by
//! `gen-content`) is used. Records are immutable once loaded.
//!
//! ```text
//! [site] [hero] [contacts] [[stats]] [settlement] [route] [features]
//! [houses] [process] [partners] [media] [faq] [cta] [footer] [labels]
//! ```
//!
//! Every table is optional and unknown keys are rejected. House listings
//! require all their fields except `gallery` and `features`.

use crate::href::{is_non_empty, is_safe_href, safe_href};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
}

/// DOM ids of the page sections, valid targets for footer navigation.
pub const SECTION_IDS: [&str; 8] = [
    "about-settlement",
    "route",
    "features",
    "houses",
    "process",
    "partners",
    "media",
    "faq",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub hero: Hero,
    pub contacts: Contacts,
    pub stats: Vec<Stat>,
    pub settlement: SettlementGallery,
    pub route: RouteSection,
    pub features: FeaturesSection,
    pub houses: HousesSection,
    pub process: ProcessSection,
    pub partners: PartnersSection,
    pub media: Media,
    pub faq: FaqSection,
    pub cta: CallToAction,
    pub footer: Footer,
    pub labels: Labels,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    pub place: String,
    pub organization: String,
    pub organization_short: String,
    pub location: String,
    pub logo: String,
    pub logo_alt: String,
}

impl SiteInfo {
    /// "Name | Place", or just the name when no place is set.
    pub fn display_title(&self) -> String {
        if is_non_empty(&self.place) {
            format!("{} | {}", self.name, self.place)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub title: String,
    pub text: String,
    pub image: String,
    pub image_alt: String,
    pub cta_label: String,
}

/// Outbound contact endpoints. Any of them may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contacts {
    pub phone_human: String,
    pub phone_link: String,
    pub email: String,
    pub whatsapp: String,
    pub telegram: String,
    pub vk: String,
    pub ok: String,
    pub rutube: String,
    pub youtube: String,
    pub max: String,
    pub whatsapp_group: String,
}

impl Contacts {
    /// WhatsApp if usable, otherwise Telegram.
    pub fn primary_cta(&self) -> Option<&str> {
        safe_href(&self.whatsapp).or_else(|| safe_href(&self.telegram))
    }

    /// Phone link, only when both the display number and the link are set.
    pub fn phone(&self) -> Option<&str> {
        if is_non_empty(&self.phone_human) && is_non_empty(&self.phone_link) {
            safe_href(&self.phone_link)
        } else {
            None
        }
    }

    /// `mailto:` link for a non-empty email.
    pub fn email_href(&self) -> Option<String> {
        is_non_empty(&self.email).then(|| format!("mailto:{}", self.email.trim()))
    }

    /// Social buttons in display order, unsanitized.
    pub fn social_links(&self) -> [(&'static str, &str); 8] {
        [
            ("Telegram", self.telegram.as_str()),
            ("WhatsApp", self.whatsapp.as_str()),
            ("WA-группа", self.whatsapp_group.as_str()),
            ("VK", self.vk.as_str()),
            ("Одноклассники", self.ok.as_str()),
            ("YouTube", self.youtube.as_str()),
            ("RuTube", self.rutube.as_str()),
            ("MAX", self.max.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Photo gallery of the settlement, addressed by a numbered path pattern.
///
/// `{nn}` expands to a two-digit number, `{n}` to a plain one. An explicit
/// `images` list takes priority over the pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettlementGallery {
    pub title: String,
    pub pattern: String,
    pub count: usize,
    pub images: Vec<String>,
    /// Alt text template, `{n}` is the 1-based photo number.
    pub alt: String,
}

impl SettlementGallery {
    pub fn image_set(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        (1..=self.count).map(|n| expand_number(&self.pattern, n)).collect()
    }

    pub fn alt_for(&self, n: usize) -> String {
        expand_number(&self.alt, n)
    }
}

fn expand_number(template: &str, n: usize) -> String {
    template
        .replace("{nn}", &format!("{n:02}"))
        .replace("{n}", &n.to_string())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteSection {
    pub title: String,
    pub links: Vec<RouteLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesSection {
    pub title: String,
    pub groups: Vec<FeatureGroup>,
    pub accreditation: Option<Accreditation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Accreditation {
    pub title: String,
    pub text: String,
    pub link_label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HousesSection {
    pub title: String,
    /// Inline markdown shown under the listings.
    pub note: String,
    pub items: Vec<HouseListing>,
}

/// A house configuration offered at a fixed price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseListing {
    pub id: String,
    pub title: String,
    pub area: f64,
    pub beds: u32,
    pub fixed_price: u64,
    pub ready: String,
    pub cover: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl HouseListing {
    /// Cover followed by the gallery, empty entries dropped.
    pub fn image_set(&self) -> Vec<String> {
        std::iter::once(&self.cover)
            .chain(&self.gallery)
            .filter(|src| is_non_empty(src))
            .cloned()
            .collect()
    }

    /// Lightbox index of gallery thumbnail `i`.
    ///
    /// The cover occupies index 0 unless it is empty.
    pub fn thumbnail_index(&self, i: usize) -> usize {
        let preceding = self.gallery[..i.min(self.gallery.len())]
            .iter()
            .filter(|src| is_non_empty(src))
            .count();
        preceding + usize::from(is_non_empty(&self.cover))
    }

    /// DOM id of the listing card.
    pub fn anchor(&self) -> String {
        format!("house-{}", self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessSection {
    pub title: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub title: String,
    pub text: String,
    pub icon: StepIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepIcon {
    Building,
    Shield,
    Hammer,
    Home,
}

impl StepIcon {
    pub fn name(self) -> &'static str {
        match self {
            StepIcon::Building => "building",
            StepIcon::Shield => "shield",
            StepIcon::Hammer => "hammer",
            StepIcon::Home => "home",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            StepIcon::Building => "🏢",
            StepIcon::Shield => "🛡",
            StepIcon::Hammer => "🔨",
            StepIcon::Home => "🏠",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartnersSection {
    pub title: String,
    pub note: String,
    pub items: Vec<Partner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Partner {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub site: String,
    pub logo: String,
    pub desc: String,
}

/// Embedded third-party players.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Media {
    pub title: String,
    pub youtube_title: String,
    pub youtube_playlist: String,
    pub rutube_title: String,
    pub rutube_embed: String,
}

impl Media {
    pub fn youtube_embed(&self) -> Option<String> {
        let id = self.youtube_playlist.trim();
        (!id.is_empty()).then(|| format!("https://www.youtube.com/embed/videoseries?list={id}"))
    }

    pub fn rutube_embed(&self) -> Option<&str> {
        safe_href(&self.rutube_embed)
    }

    pub fn is_empty(&self) -> bool {
        self.youtube_embed().is_none() && self.rutube_embed().is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqSection {
    pub title: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    pub question: String,
    /// Inline markdown.
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallToAction {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub nav_title: String,
    pub social_title: String,
    pub rights: String,
    pub nav: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub label: String,
    /// One of [`SECTION_IDS`].
    pub target: String,
}

/// Interface strings that are not part of any section's copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub header_cta: String,
    pub ready: String,
    pub bedrooms: String,
    pub photo: String,
    pub logo: String,
    pub whatsapp_cta: String,
    pub telegram_cta: String,
    pub floating_whatsapp: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            header_cta: "WhatsApp".to_string(),
            ready: "Готовность".to_string(),
            bedrooms: "спальни".to_string(),
            photo: "фото".to_string(),
            logo: "логотип".to_string(),
            whatsapp_cta: "Написать в WhatsApp".to_string(),
            telegram_cta: "Связаться в Telegram".to_string(),
            floating_whatsapp: "Написать в WhatsApp".to_string(),
        }
    }
}

impl SiteContent {
    /// Whether the section with DOM id `id` appears on the page.
    ///
    /// Route, process, partners and media are left out when they have
    /// nothing to show; the other sections always render.
    pub fn renders_section(&self, id: &str) -> bool {
        match id {
            "route" => self.route.links.iter().any(|link| is_safe_href(&link.href)),
            "process" => !self.process.steps.is_empty(),
            "partners" => !self.partners.items.is_empty(),
            "media" => !self.media.is_empty(),
            other => SECTION_IDS.contains(&other),
        }
    }

    /// Check cross-record invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        for house in &self.houses.items {
            if house.id.is_empty()
                || !house
                    .id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(ContentError::Validation(format!(
                    "house id {:?} must be non-empty ASCII letters, digits, '-' or '_'",
                    house.id
                )));
            }
            if !ids.insert(house.id.as_str()) {
                return Err(ContentError::Validation(format!(
                    "duplicate house id {:?}",
                    house.id
                )));
            }
            if house.fixed_price == 0 {
                return Err(ContentError::Validation(format!(
                    "house {:?} has no fixed_price",
                    house.id
                )));
            }
            if !(house.area.is_finite() && house.area > 0.0) {
                return Err(ContentError::Validation(format!(
                    "house {:?} area must be positive",
                    house.id
                )));
            }
        }

        let settlement = &self.settlement;
        if settlement.images.is_empty()
            && settlement.count > 0
            && !(settlement.pattern.contains("{n}") || settlement.pattern.contains("{nn}"))
        {
            return Err(ContentError::Validation(
                "settlement.pattern needs a {n} or {nn} placeholder".into(),
            ));
        }

        for link in &self.footer.nav {
            if !SECTION_IDS.contains(&link.target.as_str()) {
                return Err(ContentError::Validation(format!(
                    "footer link {:?} targets unknown section {:?} (expected one of {})",
                    link.label,
                    link.target,
                    SECTION_IDS.join(", ")
                )));
            }
            if !self.renders_section(&link.target) {
                return Err(ContentError::Validation(format!(
                    "footer link {:?} targets empty section {:?}, which is not rendered",
                    link.label, link.target
                )));
            }
        }
        Ok(())
    }
}

/// The stock `content.toml`. Used by `gen-content` and when no file exists.
pub fn stock_content_toml() -> &'static str {
    include_str!("../static/content.toml")
}

/// Parse and validate content from a TOML string.
pub fn parse_content(text: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = toml::from_str(text)?;
    content.validate()?;
    Ok(content)
}

/// Load `content.toml` from the given directory, or the stock content if absent.
pub fn load_content(root: &Path) -> Result<SiteContent, ContentError> {
    let path = root.join("content.toml");
    if !path.exists() {
        return parse_content(stock_content_toml());
    }
    parse_content(&fs::read_to_string(&path)?)
}
