use anyhow::{Context, Result};
use ghostshell::{BuildOptions, Config, SiteSettings};
use std::fs;
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::parse();
    ghostshell::init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    let settings = SiteSettings::load(&config.settings).with_context(|| {
        format!("Failed to load settings: {}", config.settings.display())
    })?;
    info!("Loaded settings for {}", settings.title);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let stats = ghostshell::generate_site(&BuildOptions {
        settings: &settings,
        site_url: config.site_url(),
        content_dir: &config.content,
        output: &config.output,
    })
    .context("Failed to generate site")?;

    println!(
        "Generated {} pages in {}",
        stats.pages,
        config.output.display()
    );

    if !config.no_open
        && let Err(e) = open::that(&stats.home)
    {
        warn!("Failed to open {}: {:#}", stats.home.display(), e);
    }

    Ok(())
}
