use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["wikitoc.yml", "wikitoc.yaml", "wikitoc.toml", "wikitoc.json"];

/// Load configuration for a source directory.
///
/// Explicit `config_files` are merged in order; without them every default
/// config file present in `source_dir` is used. The result is validated.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    let mut config = Config {
        source: source_dir.as_ref().to_path_buf(),
        ..Config::default()
    };

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| fs::is_file(path))
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let content = fs::read_file(config_path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let file_config = parse_config(&content, config_path)?;
    merge_configs(config, &file_config);
    Ok(())
}

/// Parse configuration text, choosing the format from the file extension
fn parse_config(content: &str, path: &Path) -> BoxResult<Config> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let parsed: Result<Config, String> = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        "toml" => toml::from_str(content).map_err(|e| e.to_string()),
        "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
        _ => {
            let msg = format!("Unsupported configuration file format: {}", ext);
            return Err(TocError::Config(msg).into());
        }
    };

    parsed.map_err(|e| {
        let msg = format!("Failed to parse configuration ({}): {}", path.display(), e);
        TocError::Config(msg).into()
    })
}

/// Merge two configurations; only non-default values of `source` win
fn merge_configs(target: &mut Config, source: &Config) {
    if source.pages_dir != defaults::default_pages_dir() {
        target.pages_dir = source.pages_dir.clone();
    }

    if source.base_url != defaults::default_base_url() {
        target.base_url = source.base_url.clone();
    }

    if source.extensions != defaults::default_extensions() {
        target.extensions = source.extensions.clone();
    }

    if source.heading.is_some() {
        target.heading = source.heading.clone();
    }

    if source.max_depth != defaults::default_max_depth() {
        target.max_depth = source.max_depth;
    }

    // Boolean flags are simply set if they're true in the source
    if source.no_numbering {
        target.no_numbering = true;
    }

    if source.inline {
        target.inline = true;
    }

    if !source.deny.is_empty() {
        target.deny.extend(source.deny.iter().cloned());
    }

    if source.layout.is_some() {
        target.layout = source.layout.clone();
    }
}
