//! Site generation: wraps content fragments in the page shell.

use anyhow::{Context, Result, bail};
use maud::PreEscaped;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::assets::{FallbackIcon, write_css_assets};
use crate::components::layout::{PageShell, render};
use crate::path::{HOME_FRAGMENT, humanize, output_path, page_depth, page_slug};
use crate::settings::SiteSettings;

/// Body class applied to the home page.
pub const HOME_BODY_CLASS: &str = "home-template";

/// Body class applied to every other page.
pub const PAGE_BODY_CLASS: &str = "page-template";

/// Pre-rendered page content read from the content directory.
#[derive(Debug, Clone)]
pub struct PageSource {
    pub slug: String,
    pub fragment: String,
    pub is_home: bool,
}

impl PageSource {
    /// Output document path relative to the site root.
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.slug, self.is_home)
    }

    /// Page title shown before the site title; None for the home page.
    pub fn title(&self) -> Option<String> {
        (!self.is_home).then(|| humanize(&self.slug))
    }

    pub fn body_class(&self) -> &'static str {
        if self.is_home {
            HOME_BODY_CLASS
        } else {
            PAGE_BODY_CLASS
        }
    }
}

/// Inputs for a site build.
///
/// Settings are loaded by the caller and shared read-only by every page.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions<'a> {
    pub settings: &'a SiteSettings,
    pub site_url: &'a str,
    pub content_dir: &'a Path,
    pub output: &'a Path,
}

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStats {
    pub pages: usize,
    pub home: PathBuf,
}

/// Collects HTML fragments from the content directory.
///
/// Reads every `*.html` file directly inside `content_dir`, sorted by file
/// name. `index.html` becomes the home page. Files whose name is not a
/// valid slug are skipped.
///
/// # Errors
///
/// Returns error if the directory cannot be read, a fragment cannot be
/// read, or no `index.html` fragment exists.
pub fn collect_pages(content_dir: &Path) -> Result<Vec<PageSource>> {
    let entries = fs::read_dir(content_dir).with_context(|| {
        format!(
            "Failed to read content directory: {}",
            content_dir.display()
        )
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .context("Failed to read content directory entry")?
            .path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut pages = Vec::new();
    for path in paths {
        let Some(slug) = page_slug(&path) else {
            if path.extension().and_then(|e| e.to_str()) == Some("html") {
                warn!("Skipping fragment with unusable name: {}", path.display());
            } else {
                debug!("Ignoring non-fragment file: {}", path.display());
            }
            continue;
        };

        let fragment = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read fragment: {}", path.display()))?;
        let is_home = path.file_name().and_then(|n| n.to_str()) == Some(HOME_FRAGMENT);

        pages.push(PageSource {
            slug: slug.to_string(),
            fragment,
            is_home,
        });
    }

    if !pages.iter().any(|p| p.is_home) {
        bail!(
            "Content directory has no {}: {}",
            HOME_FRAGMENT,
            content_dir.display()
        );
    }

    Ok(pages)
}

/// Renders a single page through the shell.
///
/// # Errors
///
/// Returns error if the settings violate a required field precondition.
pub fn render_page(
    page: &PageSource,
    settings: &SiteSettings,
    site_url: &str,
    fallback_icon: &FallbackIcon,
) -> Result<String> {
    let title = page.title();
    let shell = PageShell {
        settings,
        site_url,
        fallback_icon,
        title: title.as_deref(),
        body_class: Some(page.body_class()),
        is_home: page.is_home,
        depth: page_depth(page.is_home),
    };

    let markup = render(&shell, PreEscaped(page.fragment.clone()))
        .with_context(|| format!("Failed to render page: {}", page.slug))?;
    Ok(markup.into_string())
}

/// Builds the site into the output directory.
///
/// Writes the stylesheet, renders every content fragment in parallel and
/// writes the resulting documents.
///
/// # Errors
///
/// Returns error if content cannot be collected, a page fails to render, or
/// output cannot be written.
pub fn generate_site(options: &BuildOptions<'_>) -> Result<BuildStats> {
    let pages = collect_pages(options.content_dir)?;
    info!("Collected {} pages", pages.len());

    let assets_dir = options.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let fallback_icon = FallbackIcon::bundled();
    let rendered = pages
        .par_iter()
        .map(|page| -> Result<(PathBuf, String)> {
            let html = render_page(page, options.settings, options.site_url, &fallback_icon)?;
            Ok((page.output_path(), html))
        })
        .collect::<Result<Vec<_>>>()?;

    for (relative, html) in &rendered {
        let target = options.output.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, html)
            .with_context(|| format!("Failed to write page: {}", target.display()))?;
        debug!("Generated: {}", target.display());
    }

    Ok(BuildStats {
        pages: rendered.len(),
        home: options.output.join(HOME_FRAGMENT),
    })
}
