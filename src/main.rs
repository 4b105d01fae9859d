//! CLI entry point for brutal-ssg

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "brutal-ssg")]
#[command(version)]
#[command(about = "Generate SEO-ready post pages, sitemap and robots.txt from posts.json", long_about = None)]
struct Cli {
    /// Production site URL, e.g. https://amperehour.com
    #[arg(long)]
    site_url: String,

    /// Project root (defaults to current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "brutal_ssg=debug,info"
    } else {
        "brutal_ssg=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let root = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let project = brutal_ssg::Project::new(&root, &cli.site_url)?;
    tracing::info!("Generating pages for {}", project.config.site_url);
    project.generate()?;

    println!("Done. Generated post pages + sitemap/robots.");
    println!("Tip: commit /posts/*.html, /sitemap.xml, /robots.txt");

    Ok(())
}
