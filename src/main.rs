use anyhow::{Context, Result};
use sitechrome::{BuildOptions, Config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = config.load_site().context("Failed to load site")?;
    info!(
        title = %site.metadata.title,
        main_links = site.main_menu.len(),
        content_links = site.content_menu.len(),
        "loaded site"
    );

    let report = sitechrome::build_site(
        &site,
        &BuildOptions {
            output: &config.output,
            content: config.content.as_deref(),
            theme: config.theme,
        },
    )
    .context("Failed to build site")?;

    println!("Generated: {}", report.index.display());

    if !config.no_open
        && let Err(e) = open::that(&report.index)
    {
        warn!("Failed to open browser: {:#}", e);
    }

    Ok(())
}
