//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output lists what the page will show, not which files were touched.
//! Every entity leads with a positional index and its title; details such as
//! prices, image counts and link status follow as indented context lines.
//! Links that will be suppressed are called out so a misconfigured contact
//! field is noticed at build time rather than by a visitor.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Houses
//! 001 Дом 123 м² · 1 этаж · 3 спальни
//!     Price: 11 900 000 ₽
//!     Photos: 4
//!
//! Galleries
//!     settlement: 8 photos
//!
//! Links
//!     WhatsApp: https://wa.me/79273354316
//!     Email: (empty, hidden)
//!     VK: javascript:alert(1) (unsafe, hidden)
//! ```
//!
//! ## Generate
//!
//! ```text
//! index.html
//! Copied 24 assets
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function is pure and returns `Vec<String>`; the `print_*`
//! wrappers write those lines to stdout.

use crate::generate::GenerateReport;
use crate::href::{is_non_empty, is_safe_href};
use crate::price::format_price;
use crate::site::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// One link line: the value, or why it will not be rendered.
fn link_line(label: &str, href: &str) -> String {
    let status = if is_safe_href(href) {
        href.trim().to_string()
    } else if is_non_empty(href) {
        format!("{} (unsafe, hidden)", href.trim())
    } else {
        "(empty, hidden)".to_string()
    };
    format!("{}{}: {}", indent(1), label, status)
}

/// Every outbound link of the page with its status.
fn link_lines(site: &Site) -> Vec<String> {
    let content = &site.content;
    let contacts = &content.contacts;
    let mut lines = vec![link_line("Phone", &contacts.phone_link)];
    let email = contacts.email_href().unwrap_or_default();
    lines.push(link_line("Email", &email));
    for (label, href) in contacts.social_links() {
        lines.push(link_line(label, href));
    }
    for link in &content.route.links {
        lines.push(link_line(&link.label, &link.href));
    }
    for partner in &content.partners.items {
        lines.push(link_line(&partner.name, &partner.site));
    }
    lines
}

/// Summary of what the page will contain.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let content = &site.content;
    let mut lines = Vec::new();

    lines.push("Houses".to_string());
    for (i, house) in content.houses.items.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), house.title));
        lines.push(format!(
            "{}Price: {}",
            indent(1),
            format_price(house.fixed_price, &site.config.locale).replace('\u{a0}', " ")
        ));
        lines.push(format!("{}Photos: {}", indent(1), house.image_set().len()));
    }

    lines.push(String::new());
    lines.push("Galleries".to_string());
    let settlement = content.settlement.image_set();
    if settlement.is_empty() {
        lines.push(format!(
            "{}settlement: no photos, {} fallback tiles",
            indent(1),
            site.config.gallery.tile_count
        ));
    } else {
        lines.push(format!("{}settlement: {} photos", indent(1), settlement.len()));
    }

    lines.push(String::new());
    lines.push("Links".to_string());
    lines.extend(link_lines(site));

    lines
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

/// Files written by a build.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = report.pages.clone();
    lines.push(format!("Copied {} assets", report.assets_copied));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
