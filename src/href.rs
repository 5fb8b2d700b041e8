//! Link sanitizing.
//!
//! Contact fields, partner sites and map links all come from hand-edited
//! content files. Any of them may be empty or misconfigured, so nothing is
//! rendered as an anchor until it passes [`is_safe_href`]. An unsafe value
//! never produces an error or a disabled element: the affordance is simply
//! left out of the page.
//!
//! Allowed schemes (ASCII case-insensitive): `http://`, `https://`, `tel:`,
//! `mailto:`.

use maud::{Markup, html};

const ALLOWED_SCHEMES: [&str; 4] = ["http://", "https://", "tel:", "mailto:"];

/// True when the value has at least one non-whitespace character.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff the trimmed candidate is non-empty and starts with an allowed scheme.
pub fn is_safe_href(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    !trimmed.is_empty()
        && ALLOWED_SCHEMES
            .iter()
            .any(|scheme| starts_with_ignore_case(trimmed, scheme))
}

/// The original, untrimmed candidate when it is safe.
pub fn safe_href(candidate: &str) -> Option<&str> {
    is_safe_href(candidate).then_some(candidate)
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// Renders `<a class=.. href=..>children</a>`, or nothing at all for an unsafe href.
pub fn link_button(href: &str, class: &str, children: Markup) -> Markup {
    match safe_href(href) {
        Some(safe) => html! {
            a class=(class) href=(safe) { (children) }
        },
        None => html! {},
    }
}

/// Like [`link_button`] but opens in a new tab without leaking the opener.
pub fn external_link(href: &str, class: &str, children: Markup) -> Markup {
    match safe_href(href) {
        Some(safe) => html! {
            a class=(class) href=(safe) target="_blank" rel="noopener noreferrer" { (children) }
        },
        None => html! {},
    }
}
