//! # Settlement Site
//!
//! A static generator for the one-page marketing site of a residential
//! housing development: hero banner, photo galleries, house listings with
//! fixed prices, partner logos, FAQ and contact call-to-actions.
//!
//! # Pipeline
//!
//! ```text
//! content/config.toml  ─┐
//! content/content.toml ─┼─▶ Site (loaded once) ─▶ dist/index.html
//! content/assets/      ─┘                        dist/assets/
//! ```
//!
//! The [`site::Site`] value is built once at startup and every renderer
//! borrows it; there is no global configuration.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`href`] | Link sanitizer: only `http(s)://`, `tel:` and `mailto:` values become anchors |
//! | [`lightbox`] | Lightbox state machine, scoped keyboard subscription, overlay frame plan |
//! | [`gallery`] | Gallery grid with fallback tiles and one-shot image-error fallback |
//! | [`price`] | Locale-grouped prices and areas (`11 900 000 ₽`) |
//! | [`content`] | Page records (houses, contacts, partners, FAQ…) from `content.toml` |
//! | [`config`] | Look and behavior from `config.toml`: brand colors, gallery, locale |
//! | [`site`] | The loaded config + content pair |
//! | [`generate`] | Renders the page with Maud and copies assets |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Lightbox Without a Framework
//!
//! Each image set is rendered as a group of `:target` overlay frames whose
//! prev/next links are computed by [`lightbox::frame_plan`]. Clicking a tile
//! navigates to `#lb-{group}-{index}`, so the gallery works with JavaScript
//! disabled. `static/lightbox.js` adds keyboard control (Escape and the
//! arrows) only while a frame is targeted, and swaps a broken image for the
//! fallback once.
//!
//! ## Degrade, Never Fail, at Runtime
//!
//! Empty or unsafe links, missing photos and empty galleries all degrade to
//! an omitted element or a fallback image. Build-time problems (bad TOML,
//! duplicate house ids) are errors.

pub mod config;
pub mod content;
pub mod gallery;
pub mod generate;
pub mod href;
pub mod lightbox;
pub mod output;
pub mod price;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;
