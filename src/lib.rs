//! Ghost-style page shell rendering for static blogs.

mod assets;
pub mod components;
mod config;
mod error;
pub mod generators;
mod path;
mod settings;

pub use assets::{FALLBACK_ICON_SIZE, FallbackIcon, STYLESHEET_PATH, write_css_assets};
pub use components::layout::{PageShell, render};
pub use components::nav::{FOOTER_NAV_CLASS, HEADER_NAV_CLASS, navigation};
pub use config::Config;
pub use error::ShellError;
pub use generators::{BuildOptions, BuildStats, PageSource, collect_pages, generate_site};
pub use settings::{NavigationItem, SiteSettings};

/// Initialize tracing with the specified verbosity level.
///
/// `0` defers to `RUST_LOG` (warnings when unset), `1` logs info, `2` debug
/// and anything higher trace. A `-v` level overrides the `RUST_LOG` default.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let mut filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    if let Some(level) = verbosity_level(verbose) {
        filter = filter.add_directive(level.into());
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps the `-v` count to an explicit level; None leaves `RUST_LOG` in charge.
fn verbosity_level(verbose: u8) -> Option<tracing::Level> {
    match verbose {
        0 => None,
        1 => Some(tracing::Level::INFO),
        2 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}
