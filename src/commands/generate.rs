//! Generate static files

use anyhow::{Context, Result};

use crate::content::ContentLoader;
use crate::generator::{GenerateReport, Generator};
use crate::render::FooterIcon;
use crate::Project;

/// Regenerate every output from the content source
pub fn run(project: &Project) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    let content = ContentLoader::new(&project.config)
        .load()
        .context("Cannot load content source")?;

    let icon = FooterIcon::load(project.config.footer_partial_path());
    let generator = Generator::new(project.config.clone(), icon);
    let report = generator.generate(&content)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} posts, {} new category pages in {:.2}s",
        report.posts,
        report.skeletons_created,
        duration.as_secs_f64()
    );

    Ok(report)
}
