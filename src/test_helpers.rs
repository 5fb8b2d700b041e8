//! Shared test utilities.
//!
//! Fixture setup plus small lookups over rendered HTML.
//!
//! ```rust
//! let site = fixture_site();
//! let html = render_page(&site, 2025).into_string();
//! let card = fragment_by_id(&html, "house-A");
//! assert!(card.contains("Дом A"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::site::Site;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The site defined by `fixtures/content/`.
pub fn fixture_site() -> Site {
    let tmp = setup_fixtures();
    Site::load(tmp.path()).unwrap()
}

// =========================================================================
// HTML lookups: panic with a clear message on miss
// =========================================================================

/// The markup from `id="{id}"` up to the first closing `</section>` or
/// `</article>` after it.
pub fn fragment_by_id<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!(r#"id="{id}""#);
    let start = html
        .find(&marker)
        .unwrap_or_else(|| panic!("no element with {marker} in page"));
    let rest = &html[start..];
    let end = ["</section>", "</article>"]
        .iter()
        .filter_map(|close| rest.find(close))
        .min()
        .unwrap_or(rest.len());
    &rest[..end]
}
