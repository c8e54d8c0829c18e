//! Content file to output path mapping

use std::path::{Path, PathBuf};

/// File name of the fragment rendered as the home page.
pub const HOME_FRAGMENT: &str = "index.html";

/// Extracts the page slug from a content fragment path.
///
/// Only `.html` files qualify. The slug is the file stem and must be made of
/// ASCII alphanumerics, `-` and `_`.
///
/// # Returns
///
/// Slug string, or None if the path is not a usable fragment
pub fn page_slug(path: &Path) -> Option<&str> {
    if path.extension().and_then(|e| e.to_str()) != Some("html") {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let valid = !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    valid.then_some(stem)
}

/// Output document path relative to the site root.
///
/// The home page lands at `index.html`; every other page at
/// `<slug>/index.html` so it is served from `/<slug>/`.
pub fn output_path(slug: &str, is_home: bool) -> PathBuf {
    if is_home {
        PathBuf::from(HOME_FRAGMENT)
    } else {
        Path::new(slug).join(HOME_FRAGMENT)
    }
}

/// Directory levels between a page's output document and the site root.
pub fn page_depth(is_home: bool) -> usize {
    if is_home { 0 } else { 1 }
}

/// Turns a slug into a page title: `about-me` becomes `About me`.
pub fn humanize(slug: &str) -> String {
    let words = slug.replace(['-', '_'], " ");
    let mut chars = words.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
