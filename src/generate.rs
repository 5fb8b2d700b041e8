//! HTML site generation.
//!
//! Renders the single landing page from a loaded [`Site`] and copies the
//! source `assets/` directory next to it.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The page, CSS and JS inlined
//! └── assets/           # Copied verbatim from <source>/assets/
//!     ├── settlement/01.jpg
//!     ├── houses/123/cover.jpg
//!     └── logos/...
//! ```
//!
//! ## Sections
//!
//! Header, hero, stats, settlement gallery, route, standards, houses,
//! process, partners, media, FAQ, call to action, footer, floating WhatsApp
//! button. Every outbound link goes through [`crate::href`]; a missing or
//! unsafe value drops the element instead of rendering a dead anchor.
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time:
//! - `static/style.css`: layout and components (brand colors injected from config)
//! - `static/lightbox.js`: keyboard handling for lightbox frames, image fallback
//!
//! Asset paths are not checked here; a missing photo is replaced by the
//! configured fallback in the browser.

use crate::config;
use crate::content::{HouseListing, Partner, SiteContent};
use crate::gallery::{GalleryGrid, frame_id, render_lightbox};
use crate::href::{external_link, is_non_empty, is_safe_href, link_button, safe_href};
use crate::price::{format_area, format_price};
use crate::site::Site;
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, LinkType, Parser, Tag, TagEnd, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What a build wrote.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub pages: Vec<String>,
    pub assets_copied: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/lightbox.js");

/// Render the site from `site` into `output_dir`, copying `<source>/assets`.
pub fn generate(
    site: &Site,
    source: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets_copied = copy_assets(&source.join("assets"), &output_dir.join("assets"))?;

    let year = chrono::Local::now().year();
    let page = render_page(site, year);
    fs::write(output_dir.join("index.html"), page.into_string())?;

    Ok(GenerateReport {
        pages: vec!["index.html".to_string()],
        assets_copied,
    })
}

/// Copy every file under `src` to `dst`. A missing `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Render markdown, escaping raw HTML and dropping links with unsafe targets.
pub fn markdown_to_html(text: &str) -> String {
    let mut dropped_links = Vec::new();
    let events = Parser::new(text).filter_map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            // Email autolinks carry a bare address; the writer adds `mailto:`.
            let keep = link_type == LinkType::Email
                || is_safe_href(&dest_url)
                || dest_url.starts_with('#');
            dropped_links.push(!keep);
            keep.then(|| {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                })
            })
        }
        Event::End(TagEnd::Link) => {
            let dropped = dropped_links.pop().unwrap_or(false);
            (!dropped).then_some(event)
        }
        other => Some(other),
    });
    let mut out = String::new();
    md_html::push_html(&mut out, events);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body id="top" {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// A titled page section.
fn section(id: &str, title: &str, body: Markup) -> Markup {
    html! {
        section.section id=(id) {
            h2.section-title { (title) }
            div { (body) }
        }
    }
}

fn site_header(site: &Site) -> Markup {
    let content = &site.content;
    let contacts = &content.contacts;
    html! {
        header.site-header {
            div.container.header-row {
                a.brand href="#top" {
                    @if is_non_empty(&content.site.logo) {
                        img.brand-logo src=(content.site.logo) alt=(content.site.logo_alt) data-hide-on-error="true";
                    }
                    span {
                        (content.site.name)
                        @if is_non_empty(&content.site.place) {
                            " " span.muted { "| " (content.site.place) }
                        }
                    }
                }
                @if let Some(cta) = contacts.primary_cta() {
                    div.header-cta {
                        a.btn.btn-accent href=(cta) { (content.labels.header_cta) }
                        @if let Some(phone) = contacts.phone() {
                            a.header-phone href=(phone) { (contacts.phone_human) }
                        }
                    }
                }
            }
        }
    }
}

fn hero(content: &SiteContent) -> Markup {
    let hero = &content.hero;
    html! {
        section.hero {
            @if is_non_empty(&hero.image) {
                img.hero-bg src=(hero.image) alt=(hero.image_alt);
            }
            div.container.hero-body {
                h1.hero-title { (hero.title) }
                p.hero-text { (hero.text) }
                @if !content.houses.items.is_empty() {
                    a.btn.btn-accent.btn-large href="#houses" { (hero.cta_label) " ›" }
                }
            }
        }
    }
}

fn stats(content: &SiteContent) -> Markup {
    html! {
        @if !content.stats.is_empty() {
            section.stats {
                div.container.stats-grid {
                    @for stat in &content.stats {
                        div.stat {
                            div.stat-value { (stat.value) }
                            div.stat-label { (stat.label) }
                        }
                    }
                }
            }
        }
    }
}

fn settlement_gallery(site: &Site) -> Markup {
    let settlement = &site.content.settlement;
    let grid = GalleryGrid::new(
        "settlement",
        settlement.image_set(),
        site.config.gallery.fallback.as_str(),
    )
    .with_tile_count(site.config.gallery.tile_count);
    section(
        "about-settlement",
        &settlement.title,
        grid.render(&site.config.lightbox, "about-settlement", |n| {
            settlement.alt_for(n)
        }),
    )
}

fn route(content: &SiteContent) -> Markup {
    let links: Vec<_> = content
        .route
        .links
        .iter()
        .filter(|link| is_safe_href(&link.href))
        .collect();
    html! {
        @if content.renders_section("route") {
            (section("route", &content.route.title, html! {
                div.button-row {
                    @for link in links {
                        (external_link(&link.href, "btn btn-outline", html! { (link.label) }))
                    }
                }
            }))
        }
    }
}

fn features(content: &SiteContent) -> Markup {
    let features = &content.features;
    section(
        "features",
        &features.title,
        html! {
            div.card-grid.cols-2 {
                @for group in &features.groups {
                    div.card {
                        h3.card-title { (group.title) }
                        ul.checklist {
                            @for item in &group.items {
                                li { span.check aria-hidden="true" { "✓" } (item) }
                            }
                        }
                    }
                }
                @if let Some(accreditation) = &features.accreditation {
                    div.card.card-dark {
                        h3.card-title { (accreditation.title) }
                        p { (accreditation.text) }
                        a.card-link href="#faq" { (accreditation.link_label) }
                    }
                }
            }
        },
    )
}

fn house_card(site: &Site, house: &HouseListing) -> Markup {
    let locale = &site.config.locale;
    let labels = &site.content.labels;
    let fallback = &site.config.gallery.fallback;
    let anchor = house.anchor();
    let images = house.image_set();
    let place = &site.content.site.place;
    html! {
        article.house-card id=(anchor) {
            @if is_non_empty(&house.cover) {
                a.house-cover href={ "#" (frame_id(&anchor, 0)) } {
                    img src=(house.cover) alt={ (house.title) " — " (place) } data-fallback=(fallback);
                }
            }
            div.house-body {
                h3.house-title { (house.title) }
                p.house-meta {
                    (format_area(house.area, locale)) " · " (house.beds) " " (labels.bedrooms)
                }
                p.house-ready { (labels.ready) ": " (house.ready) }
                div.house-price { (format_price(house.fixed_price, locale)) }
                @if !house.features.is_empty() {
                    ul.house-features {
                        @for feature in &house.features {
                            li { (feature) }
                        }
                    }
                }
                @if house.gallery.iter().any(|g| is_non_empty(g)) {
                    div.house-thumbs {
                        @for (i, src) in house.gallery.iter().enumerate().filter(|(_, g)| is_non_empty(g)).take(3) {
                            a.house-thumb href={ "#" (frame_id(&anchor, house.thumbnail_index(i))) } {
                                img src=(src) alt={ (house.title) " " (labels.photo) " " (i + 1) } loading="lazy" data-fallback=(fallback);
                            }
                        }
                    }
                }
            }
        }
        (render_lightbox(&anchor, &images, &anchor, &site.config.lightbox))
    }
}

fn houses(site: &Site) -> Markup {
    let houses = &site.content.houses;
    section(
        "houses",
        &houses.title,
        html! {
            div.card-grid.cols-3 {
                @for house in &houses.items {
                    (house_card(site, house))
                }
            }
            @if is_non_empty(&houses.note) {
                div.section-note { (PreEscaped(markdown_to_html(&houses.note))) }
            }
        },
    )
}

fn process(content: &SiteContent) -> Markup {
    let process = &content.process;
    html! {
        @if content.renders_section("process") {
            (section("process", &process.title, html! {
                div.card-grid.cols-4 {
                    @for step in &process.steps {
                        div.card {
                            span.step-icon data-icon=(step.icon.name()) aria-hidden="true" { (step.icon.glyph()) }
                            h4.card-title { (step.title) }
                            p.card-text { (step.text) }
                        }
                    }
                }
            }))
        }
    }
}

fn partner_card(partner: &Partner, site: &Site) -> Markup {
    let card = html! {
        div.partner-card {
            div.partner-logo {
                img src=(partner.logo) alt={ (partner.name) " — " (site.content.labels.logo) } data-fallback=(site.config.gallery.fallback);
            }
            div.partner-body {
                div.partner-head {
                    span.partner-name { (partner.name) }
                    span.partner-role { (partner.role) }
                }
                div.partner-desc { (partner.desc) }
            }
        }
    };
    html! {
        @if safe_href(&partner.site).is_some() {
            (external_link(&partner.site, "partner-link", card))
        } @else {
            div { (card) }
        }
    }
}

fn partners(site: &Site) -> Markup {
    let partners = &site.content.partners;
    html! {
        @if site.content.renders_section("partners") {
            (section("partners", &partners.title, html! {
                div.card-grid.cols-2 {
                    @for partner in &partners.items {
                        (partner_card(partner, site))
                    }
                }
                @if is_non_empty(&partners.note) {
                    div.section-note { (PreEscaped(markdown_to_html(&partners.note))) }
                }
            }))
        }
    }
}

fn video_card(title: &str, src: &str, allow: &str) -> Markup {
    html! {
        div.card.video-card {
            div.video-title { (title) }
            iframe.video-frame src=(src) title=(title) allow=(allow) allowfullscreen
                referrerpolicy="strict-origin-when-cross-origin" loading="lazy" {}
        }
    }
}

fn media(content: &SiteContent) -> Markup {
    let media = &content.media;
    html! {
        @if content.renders_section("media") {
            (section("media", &media.title, html! {
                div.card-grid.cols-2 {
                    @if let Some(src) = media.youtube_embed() {
                        (video_card(&media.youtube_title, &src,
                            "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; fullscreen"))
                    }
                    @if let Some(src) = media.rutube_embed() {
                        (video_card(&media.rutube_title, src, "autoplay; fullscreen; picture-in-picture"))
                    }
                }
            }))
        }
    }
}

fn faq(content: &SiteContent) -> Markup {
    let faq = &content.faq;
    section(
        "faq",
        &faq.title,
        html! {
            div.card-grid.cols-2 {
                @for entry in &faq.items {
                    div.card {
                        h4.card-title { (entry.question) }
                        div.faq-answer { (PreEscaped(markdown_to_html(&entry.answer))) }
                    }
                }
            }
        },
    )
}

fn call_to_action(content: &SiteContent) -> Markup {
    let contacts = &content.contacts;
    let labels = &content.labels;
    html! {
        section.cta {
            div.container.cta-row {
                div {
                    h3.cta-title { (content.cta.title) }
                    p.cta-text { (content.cta.text) }
                }
                div.button-row {
                    (link_button(&contacts.whatsapp, "btn btn-light", html! { (labels.whatsapp_cta) }))
                    (link_button(&contacts.telegram, "btn btn-ghost", html! { (labels.telegram_cta) }))
                }
            }
        }
    }
}

fn footer(content: &SiteContent, year: i32) -> Markup {
    let contacts = &content.contacts;
    let footer = &content.footer;
    let nav: Vec<_> = footer
        .nav
        .iter()
        .filter(|link| content.renders_section(&link.target))
        .collect();
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div {
                    div.footer-title { (content.site.display_title()) }
                    p.muted { (content.site.organization) }
                    @if is_non_empty(&content.site.location) {
                        div.footer-line { "📍 " (content.site.location) }
                    }
                    @if let Some(phone) = contacts.phone() {
                        div.footer-line { "☎ " a href=(phone) { (contacts.phone_human) } }
                    }
                    @if let Some(email) = contacts.email_href() {
                        div.footer-line { "✉ " (link_button(&email, "", html! { (contacts.email.trim()) })) }
                    }
                }
                @if !nav.is_empty() {
                    div {
                        div.footer-heading { (footer.nav_title) }
                        ul.footer-nav {
                            @for link in nav {
                                li { a href={ "#" (link.target) } { (link.label) } }
                            }
                        }
                    }
                }
                div {
                    div.footer-heading { (footer.social_title) }
                    div.pill-row {
                        @for (label, href) in contacts.social_links() {
                            (link_button(href, "pill", html! { (label) }))
                        }
                    }
                }
            }
            div.footer-copy {
                "© " (year) " " (content.site.organization_short) ". " (footer.rights)
            }
        }
    }
}

fn floating_whatsapp(content: &SiteContent) -> Markup {
    html! {
        @if let Some(href) = safe_href(&content.contacts.whatsapp) {
            a.floating-wa href=(href) aria-label=(content.labels.floating_whatsapp) { "✆" }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole landing page.
pub fn render_page(site: &Site, year: i32) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_brand_css(&site.config.brand),
        CSS_STATIC
    );
    let content = &site.content;

    let body = html! {
        (site_header(site))
        main {
            (hero(content))
            (stats(content))
            (settlement_gallery(site))
            (route(content))
            (features(content))
            (houses(site))
            (process(content))
            (partners(site))
            (media(content))
            (faq(content))
            (call_to_action(content))
        }
        (footer(content, year))
        (floating_whatsapp(content))
    };

    base_document(
        &content.site.display_title(),
        &site.config.locale.lang,
        &css,
        body,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixture_site, fragment_by_id, setup_fixtures};
    use tempfile::TempDir;

    fn stock_page() -> String {
        render_page(&Site::stock().unwrap(), 2025).into_string()
    }

    #[test]
    fn page_starts_with_doctype_and_lang() {
        let html = stock_page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ru">"#));
        assert!(html.contains("<title>Первый посёлок Федерации | Карповский</title>"));
    }

    #[test]
    fn page_has_all_sections() {
        let html = stock_page();
        for id in crate::content::SECTION_IDS {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
    }

    #[test]
    fn house_price_is_locale_grouped() {
        let html = stock_page();
        assert!(html.contains("11\u{a0}900\u{a0}000\u{a0}₽"));
        assert!(html.contains("13\u{a0}400\u{a0}000\u{a0}₽"));
        assert!(html.contains("158,3\u{a0}м²"));
    }

    #[test]
    fn brand_css_is_inlined() {
        let html = stock_page();
        assert!(html.contains("--brand-accent: #FF5E17"));
        assert!(html.contains(".lightbox-frame:target"));
    }

    #[test]
    fn settlement_gallery_has_eight_tiles() {
        let html = stock_page();
        for n in 1..=8 {
            assert!(html.contains(&format!("/assets/settlement/{n:02}.jpg")));
        }
        assert!(html.contains(r#"id="lb-settlement-7""#));
        assert!(!html.contains(r#"id="lb-settlement-8""#));
    }

    #[test]
    fn house_lightbox_includes_cover_and_gallery() {
        let html = stock_page();
        // H123: cover + 3 photos
        assert!(html.contains(r#"id="lb-house-H123-3""#));
        assert!(!html.contains(r#"id="lb-house-H123-4""#));
        // thumbnail 1 opens frame 1, the cover owns frame 0
        assert!(html.contains(r##"<a class="house-thumb" href="#lb-house-H123-1">"##));
    }

    #[test]
    fn empty_email_renders_no_mailto() {
        let html = stock_page();
        assert!(!html.contains("mailto:"));
    }

    #[test]
    fn partner_without_site_is_not_a_link() {
        let html = stock_page();
        assert!(html.contains(r#"href="https://paradom.ru""#));
        let elstad = html.find("ELSTAD").unwrap();
        let card_start = html[..elstad].rfind("partner-card").unwrap();
        let before = &html[..card_start];
        let last_open = before.rfind("<a ").unwrap_or(0);
        let last_close = before.rfind("</a>").unwrap_or(0);
        assert!(last_close > last_open, "ELSTAD card must not sit inside an anchor");
    }

    #[test]
    fn faq_answer_markdown_rendered() {
        let html = stock_page();
        assert!(html.contains("<strong>WhatsApp</strong>"));
    }

    #[test]
    fn videos_embedded() {
        let html = stock_page();
        assert!(
            html.contains("https://www.youtube.com/embed/videoseries?list=UUScN0eQ6cxJt6ONAsJFCbpA")
        );
        assert!(html.contains("https://rutube.ru/play/embed/f70ab2478564a7474698e230389c6e48"));
    }

    #[test]
    fn footer_year_and_socials() {
        let html = stock_page();
        assert!(html.contains("© 2025 Федерация ИЖС РБ."));
        assert!(
            html.contains(r#"<a class="pill" href="https://vk.com/clips/federationigs_ufa">VK</a>"#)
        );
        assert!(html.contains(">MAX</a>"));
    }

    #[test]
    fn unsafe_links_are_suppressed() {
        let site = fixture_site();
        let html = render_page(&site, 2025).into_string();
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("maps.example.com"));
        assert!(!html.contains(">VK</a>"));
        assert!(!html.contains("Одноклассники"));
        assert!(html.contains("https://go.2gis.com/test"));
    }

    #[test]
    fn missing_contacts_hide_cta_blocks() {
        let mut site = fixture_site();
        site.content.contacts.whatsapp.clear();
        site.content.contacts.telegram = "  ".to_string();
        let html = render_page(&site, 2025).into_string();
        assert!(!html.contains(r#"class="header-cta""#));
        assert!(!html.contains(r#"class="floating-wa""#));
        assert!(!html.contains(&site.content.labels.whatsapp_cta));
        assert!(!html.contains(&site.content.labels.telegram_cta));
    }

    #[test]
    fn header_cta_falls_back_to_telegram() {
        let mut site = fixture_site();
        site.content.contacts.whatsapp = "wa.me/123".to_string();
        let html = render_page(&site, 2025).into_string();
        assert!(html.contains(r#"<a class="btn btn-accent" href="https://t.me/test_settlement">"#));
        assert!(!html.contains(r#"class="floating-wa""#));
    }

    #[test]
    fn empty_settlement_uses_configured_tile_count() {
        let site = fixture_site();
        let html = render_page(&site, 2025).into_string();
        let gallery = fragment_by_id(&html, "about-settlement");
        assert_eq!(gallery.matches("gallery-tile").count(), 4);
        assert_eq!(
            gallery.matches(r#"src="/assets/seo/fallback.gif""#).count(),
            8
        );
    }

    #[test]
    fn house_without_gallery_has_single_frame() {
        let site = fixture_site();
        let html = render_page(&site, 2025).into_string();
        assert!(html.contains(r#"id="lb-house-B-0""#));
        assert!(!html.contains(r#"id="lb-house-B-1""#));
        let card = fragment_by_id(&html, "house-B");
        assert!(!card.contains("house-thumbs"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut site = fixture_site();
        site.content.process.steps.clear();
        site.content.partners.items.clear();
        site.content.media = Default::default();
        site.content.route.links.clear();
        let html = render_page(&site, 2025).into_string();
        assert!(!html.contains(r#"id="process""#));
        assert!(!html.contains(r#"id="partners""#));
        assert!(!html.contains(r#"id="media""#));
        assert!(!html.contains(r#"id="route""#));
    }

    #[test]
    fn footer_skips_links_to_omitted_sections() {
        let mut site = fixture_site();
        site.content.process.steps.clear();
        site.content.footer.nav.push(crate::content::FooterLink {
            label: "Процесс".to_string(),
            target: "process".to_string(),
        });
        let html = render_page(&site, 2025).into_string();
        assert!(!html.contains(r##"href="#process""##));
        assert!(html.contains(r##"<a href="#houses">Дома</a>"##));
    }

    #[test]
    fn content_is_escaped() {
        let mut site = fixture_site();
        site.content.hero.title = "<script>alert('x')</script>".to_string();
        let html = render_page(&site, 2025).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn markdown_keeps_email_autolinks() {
        let html = markdown_to_html("Пишите на <info@karpovsky.ru>");
        assert!(html.contains(r#"<a href="mailto:info@karpovsky.ru">info@karpovsky.ru</a>"#));
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html = markdown_to_html("Hi <img src=x onerror=alert(1)>");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn markdown_drops_unsafe_links_but_keeps_text() {
        let html =
            markdown_to_html("[click](javascript:alert(1)) and [ok](https://ok.ru) and [faq](#faq)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click"));
        assert!(html.contains(r#"<a href="https://ok.ru">ok</a>"#));
        assert!(html.contains(r##"<a href="#faq">faq</a>"##));
    }

    // =========================================================================
    // generate() filesystem tests
    // =========================================================================

    #[test]
    fn generate_writes_index_and_copies_assets() {
        let source = setup_fixtures();
        let out = TempDir::new().unwrap();
        let site = Site::load(source.path()).unwrap();

        let report = generate(&site, source.path(), out.path()).unwrap();

        assert_eq!(report.pages, vec!["index.html".to_string()]);
        assert_eq!(report.assets_copied, 3);
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("assets/seo/fallback.gif").is_file());
        assert!(out.path().join("assets/houses/a/cover.gif").is_file());
    }

    #[test]
    fn generate_without_assets_dir() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let site = Site::stock().unwrap();
        let report = generate(&site, source.path(), &out.path().join("dist")).unwrap();
        assert_eq!(report.assets_copied, 0);
        let html = fs::read_to_string(out.path().join("dist/index.html")).unwrap();
        assert!(html.contains("Карповский"));
    }
}
