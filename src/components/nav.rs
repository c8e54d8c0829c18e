//! Site navigation link list component

use maud::{Markup, html};

use crate::settings::NavigationItem;

/// Class applied to navigation links in the header bar.
pub const HEADER_NAV_CLASS: &str = "site-nav-item";

/// Class applied to navigation links in the footer.
pub const FOOTER_NAV_CLASS: &str = "site-foot-nav-item";

/// Renders navigation links
///
/// Emits one anchor per item in the given order, each carrying `nav_class`.
/// External links open in a new tab; site relative links are plain anchors.
///
/// # Arguments
///
/// * `items`: Navigation entries from site settings
/// * `nav_class`: CSS class distinguishing header and footer styling
///
/// # Returns
///
/// Sequence of anchor elements without a wrapping container
pub fn navigation(items: &[NavigationItem], nav_class: &str) -> Markup {
    html! {
        @for item in items {
            @if is_external(&item.url) {
                a class=(nav_class) href=(item.url) target="_blank" rel="noopener noreferrer" {
                    (item.label)
                }
            } @else {
                a class=(nav_class) href=(item.url) { (item.label) }
            }
        }
    }
}

/// Checks whether a navigation URL points off site
///
/// Matches `http` and `https` schemes case insensitively, ignoring leading
/// whitespace.
pub fn is_external(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}
