//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use prism_site::content::SITE_CONTENT;
use prism_site::{render_page, validate_content};
use tracing::{debug, info, warn};

use crate::config::PrismConfig;

/// Validate, render and write the page.
pub fn build(config: &PrismConfig) -> Result<()> {
    ensure_clean_content()?;

    let html = render_page();
    let out_dir = &config.build.out_dir;
    let path = config.output_path();

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    write_page(&path, &html)?;

    info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(())
}

/// Print the page to stdout.
pub fn render() -> Result<()> {
    let html = render_page();
    debug!("Rendered {} bytes", html.len());

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .context("Failed to write page to stdout")?;
    stdout.write_all(b"\n").context("Failed to write page to stdout")?;
    Ok(())
}

/// Report content issues; fails when any are found.
pub fn check() -> Result<()> {
    ensure_clean_content()?;
    println!("Content OK");
    Ok(())
}

/// Print every content table as JSON.
pub fn content(pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(&SITE_CONTENT)
    } else {
        serde_json::to_string(&SITE_CONTENT)
    }
    .context("Failed to serialize content")?;

    println!("{json}");
    Ok(())
}

fn ensure_clean_content() -> Result<()> {
    let issues = validate_content();
    if issues.is_empty() {
        debug!("Content tables passed validation");
        return Ok(());
    }

    for issue in &issues {
        warn!("{issue}");
    }
    bail!("{} content issue(s) found", issues.len())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
