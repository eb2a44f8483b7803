//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const ATTACHMENTS: &str = include_str!("../assets/components/attachments.css");

const POST_PAGE: &str = include_str!("../assets/page-post.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Bundled stylesheet file names, as linked from generated pages
pub const STYLESHEET_NAMES: &[&str] = &["post.css", "markdown.css"];

/// Writes all bundled CSS assets to output directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file cannot be written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(
        assets_dir,
        "post.css",
        &[BASE, LAYOUT, ATTACHMENTS, POST_PAGE],
    )?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    tracing::debug!(asset = name, "wrote stylesheet");
    Ok(())
}
