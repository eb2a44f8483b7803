use anyhow::{Context, Result};
use postview::{Config, Post, init_logging, normalize_content, pages, write_css_assets};
use std::fs;
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;
    init_logging(config.log_filter())?;

    let mut post = Post::load(&config.input).context("Failed to load post")?;
    info!(
        input = %config.input.display(),
        media = post.media().len(),
        "loaded post"
    );

    if config.normalize_only {
        println!("{}", normalize_content(post.content(), post.media()));
        return Ok(());
    }

    if let Some(title) = &config.title {
        post = post.with_title(title.as_str());
    }

    let page = pages::post::generate(&post, &config.site_name)
        .context("Failed to generate post page")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    write_css_assets(&config.output.join("assets")).context("Failed to write assets")?;

    let page_path = config.output.join(format!("{}.html", post.slug()));
    fs::write(&page_path, page.into_string())
        .with_context(|| format!("Failed to write {}", page_path.display()))?;
    info!(path = %page_path.display(), "wrote post page");

    println!("Generated: {}", page_path.display());

    if config.open
        && let Err(e) = open::that(&page_path)
    {
        warn!("Failed to open {}: {}", page_path.display(), e);
    }

    Ok(())
}
