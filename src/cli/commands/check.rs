use std::path::Path;

use anyhow::{Context, Result};
use common::site::PAGES;
use tracing::{debug, info};

use crate::config::validate_dist_dir;

/// Validate a bundle directory and print the page table it will be served with.
pub fn check_dist(dist_dir: &str) -> Result<()> {
    let dist_dir = Path::new(dist_dir);
    debug!("Checking bundle at {}", dist_dir.display());

    validate_dist_dir(dist_dir)
        .with_context(|| format!("Bundle at {} is not servable", dist_dir.display()))?;

    let files = std::fs::read_dir(dist_dir)
        .with_context(|| format!("Failed to list {}", dist_dir.display()))?
        .count();
    info!("Bundle at {} contains {} entries", dist_dir.display(), files);

    println!("{:<12} {}", "PATH", "TITLE");
    for page in PAGES {
        println!("{:<12} {}", page.path, page.title);
    }
    println!("Any other path: 404 with the not-found view");

    Ok(())
}
