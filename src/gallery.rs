//! Gallery grid and lightbox overlay markup.
//!
//! A grid renders a fixed tile layout from an image set. An empty set is
//! replaced by `tile_count` copies of the fallback image so the section keeps
//! its shape while photos are still missing. Each tile links to a lightbox
//! frame (`#lb-{grid}-{index}`); frames are plain `:target` overlays, so the
//! gallery navigates without JavaScript and `lightbox.js` only adds keyboard
//! handling and image-error fallback on top.
//!
//! ## Image-error fallback
//!
//! A tile whose image fails to load swaps to the fallback exactly once. The
//! swap is tracked as state ([`TileImage`]) and paths are compared in
//! canonical form ([`canonical_asset_path`]), so `assets/og.jpg`,
//! `/assets/./og.jpg` and `https://host/assets/og.jpg` are all recognised as
//! the fallback and a failing fallback never triggers another swap.
//!
//! The swap itself happens in the browser. [`TileImage`] is the reference
//! model `lightbox.js` mirrors (`data-fallback`, `data-substituted`, pathname
//! comparison); the generator only emits the attributes it reads.

use crate::config::LightboxConfig;
use crate::lightbox::{Lightbox, frame_plan};
use maud::{Markup, html};

/// Tile count used when a grid does not configure one.
pub const DEFAULT_TILE_COUNT: usize = 8;

/// Reduce an asset reference to a root-relative path with no `.`/`..`
/// segments, duplicate slashes, query or fragment.
///
/// ```text
/// https://site.ru/assets/seo/og.jpg?v=2  →  /assets/seo/og.jpg
/// assets/seo/../seo/og.jpg               →  /assets/seo/og.jpg
/// ```
pub fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim();
    let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();
    let without_origin = match origin_len(without_query) {
        Some(len) => {
            let rest = &without_query[len..];
            rest.find('/').map_or("/", |slash| &rest[slash..])
        }
        None => without_query,
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in without_origin.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Length of a leading `scheme://` or `//`, if the reference has an origin.
fn origin_len(path: &str) -> Option<usize> {
    if path.starts_with("//") {
        return Some(2);
    }
    let colon = path.find("://")?;
    let scheme = &path[..colon];
    let is_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    is_scheme.then_some(colon + 3)
}

/// True when both references point at the same asset.
pub fn same_asset(a: &str, b: &str) -> bool {
    canonical_asset_path(a) == canonical_asset_path(b)
}

/// Image source of one tile with its one-shot fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    src: String,
    fallback: String,
    substituted: bool,
}

impl TileImage {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fallback: fallback.into(),
            substituted: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_substituted(&self) -> bool {
        self.substituted
    }

    /// Handle a load failure. Returns the new source on the first failure of
    /// a non-fallback image and `None` on every later call.
    pub fn on_error(&mut self) -> Option<&str> {
        if self.substituted || same_asset(&self.src, &self.fallback) {
            self.substituted = true;
            return None;
        }
        self.src.clone_from(&self.fallback);
        self.substituted = true;
        Some(self.src.as_str())
    }
}

/// DOM id of a lightbox frame.
pub fn frame_id(group: &str, index: usize) -> String {
    format!("lb-{group}-{index}")
}

/// A clickable tile grid backed by a lightbox.
#[derive(Debug, Clone)]
pub struct GalleryGrid {
    id: String,
    images: Vec<String>,
    fallback: String,
    tile_count: usize,
}

impl GalleryGrid {
    pub fn new(id: impl Into<String>, images: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            images,
            fallback: fallback.into(),
            tile_count: DEFAULT_TILE_COUNT,
        }
    }

    pub fn with_tile_count(mut self, tile_count: usize) -> Self {
        self.tile_count = tile_count;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sources shown in the grid, in display order.
    pub fn tiles(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.fallback.clone(); self.tile_count]
        } else {
            self.images.clone()
        }
    }

    /// Tile `index` was clicked.
    pub fn select(&self, lightbox: &mut Lightbox, index: usize) {
        lightbox.open(self.tiles(), index);
    }

    /// The grid plus its lightbox frames. `alt` receives the 1-based tile number.
    pub fn render(
        &self,
        labels: &LightboxConfig,
        return_to: &str,
        alt: impl Fn(usize) -> String,
    ) -> Markup {
        let tiles = self.tiles();
        html! {
            div.gallery-grid {
                @for (i, src) in tiles.iter().enumerate() {
                    a.gallery-tile href={ "#" (frame_id(&self.id, i)) } {
                        img src=(src) alt=(alt(i + 1)) loading="lazy" data-fallback=(self.fallback);
                    }
                }
            }
            (render_lightbox(&self.id, &tiles, return_to, labels))
        }
    }
}

/// Overlay frames for one image set. Renders nothing for an empty set.
pub fn render_lightbox(
    group: &str,
    images: &[String],
    return_to: &str,
    labels: &LightboxConfig,
) -> Markup {
    let frames = frame_plan(images);
    html! {
        @if !frames.is_empty() {
            div.lightbox data-lightbox=(group) {
                @for frame in &frames {
                    div.lightbox-frame id=(frame_id(group, frame.index)) role="dialog" aria-modal="true" {
                        a.lightbox-close href={ "#" (return_to) } data-action="close" aria-label=(labels.close_label) { "×" }
                        a.lightbox-prev href={ "#" (frame_id(group, frame.prev)) } data-action="prev" aria-label=(labels.prev_label) { "‹" }
                        img.lightbox-image src=(frame.src) alt="" loading="lazy";
                        a.lightbox-next href={ "#" (frame_id(group, frame.next)) } data-action="next" aria-label=(labels.next_label) { "›" }
                    }
                }
            }
        }
    }
}
