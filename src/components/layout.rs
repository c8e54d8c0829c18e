//! Page shell wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};
use tracing::debug;

use super::footer::footer;
use super::nav::{HEADER_NAV_CLASS, navigation};
use super::sidebar::sidebar;
use crate::assets::{FallbackIcon, STYLESHEET_PATH};
use crate::error::ShellError;
use crate::settings::SiteSettings;

const ICON_FONT_HREF: &str = "https://use.fontawesome.com/releases/v5.15.4/css/all.css";

/// Inputs for a single page render.
///
/// Borrowed from the caller for the duration of the render. Every page of a
/// build shares the same settings, site URL and fallback icon.
#[derive(Debug, Clone, Copy)]
pub struct PageShell<'a> {
    pub settings: &'a SiteSettings,
    /// Site base URL used for feed links.
    pub site_url: &'a str,
    pub fallback_icon: &'a FallbackIcon,
    /// Page title, shown before the site title in `<title>`.
    pub title: Option<&'a str>,
    pub body_class: Option<&'a str>,
    pub is_home: bool,
    /// Directory levels between the page and the site root.
    pub depth: usize,
}

impl PageShell<'_> {
    /// Content container class.
    pub fn container_class(&self) -> &'static str {
        if self.is_home { "home-container" } else { "container" }
    }

    /// Stylesheet link relative to the page, so output works over `file://`.
    pub fn stylesheet_href(&self) -> String {
        format!("{}{}", "../".repeat(self.depth), STYLESHEET_PATH)
    }

    /// Document `<title>` text.
    pub fn document_title(&self) -> String {
        match self.title {
            Some(title) => format!("{} - {}", title, self.settings.title),
            None => self.settings.title.clone(),
        }
    }
}

/// Wraps page content in the site shell
///
/// Produces a complete HTML document: language attribute, stylesheets and
/// the site's custom CSS in the head, the body class, a header navigation
/// bar, the content container (preceded by the sidebar on the home page)
/// and the footer.
///
/// Custom CSS is inserted without escaping.
///
/// # Arguments
///
/// * `shell`: Settings and per page flags
/// * `children`: Page specific body markup
///
/// # Errors
///
/// Returns error if the settings are missing a required field.
pub fn render(shell: &PageShell<'_>, children: Markup) -> Result<Markup, ShellError> {
    let settings = shell.settings;
    settings.validate()?;

    if settings.logo.is_none() && shell.is_home {
        debug!("No site logo configured, using fallback icon");
    }

    Ok(html! {
        (DOCTYPE)
        html lang=(settings.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (shell.document_title()) }
                link rel="stylesheet" href=(ICON_FONT_HREF);
                link rel="stylesheet" href=(shell.stylesheet_href());
                style type="text/css" { (PreEscaped(&settings.codeinjection_styles)) }
            }
            body class=[shell.body_class] {
                div class="viewport" {
                    div class="viewport-top" {
                        header class="site-head" {
                            nav class="site-nav" {
                                div class="site-nav-left" {
                                    (navigation(&settings.navigation, HEADER_NAV_CLASS))
                                }
                            }
                        }
                        div class=(shell.container_class()) {
                            @if shell.is_home {
                                (sidebar(settings, shell.fallback_icon, shell.site_url))
                            }
                            (children)
                        }
                    }
                    div class="viewport-bottom" {
                        (footer(settings))
                    }
                }
            }
        }
    })
}
