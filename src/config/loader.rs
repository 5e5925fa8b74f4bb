use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AlgolabConfig;
use crate::errors::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".algolab.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<AlgolabConfig> {
    let config = toml::from_str::<AlgolabConfig>(contents)?;
    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, any read or
/// parse failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<AlgolabConfig> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: format!("Failed to read config file: {}", e),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    parse_config(&contents).context(format!("Failed to parse {}", path.display()))
}

/// Try loading a discovered config; failures are logged and skipped
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AlgolabConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.algolab.toml` starting at `start` and walking upwards.
pub fn discover_config(start: PathBuf) -> AlgolabConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AlgolabConfig::default()
        })
}

/// Discover config from the current directory, falling back to defaults.
pub fn load_config() -> AlgolabConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AlgolabConfig::default()
        }
    }
}

/// Explicit path wins; otherwise discover.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AlgolabConfig> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::ColorMode;
    use crate::io::output::OutputFormat;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AlgolabConfig::default());
        assert_eq!(config.arrays().search_target, 22);
        assert_eq!(config.arrays().overlap_offset, 100);
        assert!(!config.arrays().sort_secondary);
        assert_eq!(config.matrix().scalar, 5);
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(indoc! {r#"
            [arrays]
            search_target = 99
            sort_secondary = true

            [matrix]
            scalar = -3

            [output]
            default_format = "json"
            color = "never"
        "#})
        .unwrap();

        let arrays = config.arrays();
        assert_eq!(arrays.search_target, 99);
        assert_eq!(arrays.overlap_offset, 100, "missing keys keep defaults");
        assert!(arrays.sort_secondary);
        assert_eq!(config.matrix().scalar, -3);
        assert_eq!(config.output().default_format, Some(OutputFormat::Json));
        assert_eq!(config.output().color, Some(ColorMode::Never));
    }

    #[test]
    fn test_parse_invalid_config_is_error() {
        let err = parse_config("[matrix]\nscalar = \"five\"").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_explicit_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(load_config_from_path(&missing).is_err());
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[matrix]\nscalar = 7\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.matrix().scalar, 7);
    }

    #[test]
    fn test_discover_skips_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = discover_config(temp_dir.path().to_path_buf());
        assert_eq!(config.matrix().scalar, 5);
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
