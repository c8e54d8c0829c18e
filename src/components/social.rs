//! Social profile and feed link components

use maud::{Markup, html};

/// Hard-coded author profile link: (css class, URL, icon font class).
pub type ProfileLink = (&'static str, &'static str, &'static str);

/// Author profiles shown in the sidebar social widget.
///
/// These are fixed and independent of site settings, so they duplicate the
/// settings driven links for Twitter.
pub const PROFILE_LINKS: &[ProfileLink] = &[
    ("twitter", "https://twitter.com/ToddRBirchard", "fab fa-twitter"),
    (
        "angellist",
        "https://angel.co/todd-birchard?public_profile=1",
        "fab fa-angellist",
    ),
    (
        "linkedin",
        "https://www.linkedin.com/in/toddbirchard/",
        "fab fa-linkedin-in",
    ),
    ("github", "https://github.com/toddbirchard", "fab fa-github"),
    (
        "quora",
        "https://www.quora.com/profile/Todd-Birchard",
        "fab fa-quora",
    ),
];

/// Site feed URL (`<site_url>/rss/`).
pub fn feed_url(site_url: &str) -> String {
    format!("{}/rss/", site_url.trim_end_matches('/'))
}

/// Feedly subscription URL for the site feed.
pub fn feedly_url(site_url: &str) -> String {
    format!("https://feedly.com/i/subscription/feed/{}", feed_url(site_url))
}

/// Renders the fixed profile icon links followed by the site feed link
pub fn profile_links(site_url: &str) -> Markup {
    html! {
        @for (class, href, icon) in PROFILE_LINKS {
            a href=(href) target="_blank" class=(class) {
                i class=(icon) {}
            }
        }
        a href=(feed_url(site_url)) target="_blank" class="rss" {
            i class="fas fa-rss" {}
        }
    }
}

/// Renders settings driven social icons
///
/// Twitter and Facebook links appear only when their URL is present. The
/// feed subscription link is always rendered.
///
/// # Arguments
///
/// * `twitter_url`: Derived Twitter profile URL, if the handle is set
/// * `facebook_url`: Derived Facebook page URL, if the handle is set
/// * `site_url`: Site base URL used for the feed link
pub fn social_icons(
    twitter_url: Option<&str>,
    facebook_url: Option<&str>,
    site_url: &str,
) -> Markup {
    html! {
        @if let Some(url) = twitter_url {
            (icon_link(url, "/images/icons/twitter.svg", "Twitter"))
        }
        @if let Some(url) = facebook_url {
            (icon_link(url, "/images/icons/facebook.svg", "Facebook"))
        }
        (icon_link(&feedly_url(site_url), "/images/icons/rss.svg", "RSS Feed"))
    }
}

fn icon_link(href: &str, icon: &str, alt: &str) -> Markup {
    html! {
        a href=(href) class="site-nav-item" target="_blank" rel="noopener noreferrer" {
            img class="site-nav-icon" src=(icon) alt=(alt);
        }
    }
}
