use log::{info, warn};

use crate::config::Config;
use crate::toc::MAX_DEPTH;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs;

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_pages_directory(config)?;
    validate_extensions(config)?;
    validate_depth(config);
    Ok(())
}

/// Validate the pages directory
fn validate_pages_directory(config: &Config) -> BoxResult<()> {
    let pages = config.pages_path();

    if !pages.exists() {
        let msg = format!("Pages directory does not exist: {}", pages.display());
        return Err(TocError::Config(msg).into());
    }

    if !fs::is_directory(&pages) {
        let msg = format!("Pages path is not a directory: {}", pages.display());
        return Err(TocError::Config(msg).into());
    }

    info!("Pages directory: {}", pages.display());
    Ok(())
}

/// At least one usable page extension is required
fn validate_extensions(config: &Config) -> BoxResult<()> {
    if config.extensions.iter().all(|ext| ext.trim().is_empty()) {
        return Err(TocError::Config("No page file extensions configured".to_string()).into());
    }

    if let Some(ext) = config.extensions.iter().find(|ext| ext.starts_with('.')) {
        warn!("Extension '{}' starts with a dot; extensions are matched without it", ext);
    }
    Ok(())
}

/// Out of range depths are clamped when rendering, so only warn
fn validate_depth(config: &Config) {
    if config.max_depth == 0 || config.max_depth > MAX_DEPTH {
        warn!(
            "max_depth {} is outside 1..={}; it will be clamped",
            config.max_depth, MAX_DEPTH
        );
    }
}
