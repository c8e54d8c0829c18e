//! Home page sidebar component

use maud::{Markup, html};

use super::social::{profile_links, social_icons};
use crate::assets::FallbackIcon;
use crate::settings::SiteSettings;

/// Renders the home page sidebar
///
/// Shows the site logo (or the fallback icon when no logo is configured)
/// with the site description, the fixed author profile links, and the
/// settings driven social icons.
///
/// # Arguments
///
/// * `settings`: Site settings supplying logo, description and handles
/// * `fallback_icon`: Image used when `settings.logo` is absent
/// * `site_url`: Site base URL for feed links
///
/// # Returns
///
/// `aside.sidebar` markup
pub fn sidebar(settings: &SiteSettings, fallback_icon: &FallbackIcon, site_url: &str) -> Markup {
    let twitter_url = settings.twitter_url();
    let facebook_url = settings.facebook_url();

    html! {
        aside class="sidebar" {
            div class="widget about" {
                @if let Some(logo) = &settings.logo {
                    img class="site-logo" src=(logo) alt=(settings.title);
                } @else {
                    img class="site-logo-fallback"
                        src=(fallback_icon.src)
                        width=(fallback_icon.width)
                        height=(fallback_icon.height)
                        alt=(settings.title);
                }
                p class="description" { (settings.description) }
            }
            div class="widget social" {
                (profile_links(site_url))
            }
            div class="widget tags" {
                (social_icons(twitter_url.as_deref(), facebook_url.as_deref(), site_url))
            }
        }
    }
}
