//! Site footer component

use maud::{Markup, PreEscaped, html};

use super::nav::{FOOTER_NAV_CLASS, navigation};
use crate::settings::SiteSettings;

/// Renders the site footer
///
/// Left side links the site title to the root path followed by the fixed
/// attribution line. Right side holds the footer navigation.
pub fn footer(settings: &SiteSettings) -> Markup {
    html! {
        footer class="site-foot" {
            div class="site-foot-nav container" {
                div class="site-foot-nav-left" {
                    a href="/" { (settings.title) }
                    " © 2019 " (PreEscaped("&mdash;")) " Published with "
                    a class="site-foot-nav-item" href="https://ghost.org" target="_blank" rel="noopener noreferrer" {
                        "Ghost"
                    }
                }
                div class="site-foot-nav-right" {
                    (navigation(&settings.navigation, FOOTER_NAV_CLASS))
                }
            }
        }
    }
}
