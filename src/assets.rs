//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const SIDEBAR: &str = include_str!("../assets/components/sidebar.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const CONTENT_PAGE: &str = include_str!("../assets/page-content.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "index.css",
        &[BASE, LAYOUT, SIDEBAR, INDEX_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "page.css",
        &[BASE, LAYOUT, SIDEBAR, CONTENT_PAGE],
    )?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
