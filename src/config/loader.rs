use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::AppConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE: &str = ".wordcloudsr.toml";

/// How many directories, starting at the current one, are searched.
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str::<AppConfig>(contents)
        .map_err(|e| Error::configuration(format!("Failed to parse {CONFIG_FILE}: {e}")))
}

/// `Ok(None)` when the file is absent or unreadable; a file that exists
/// but does not parse is an error.
fn try_load_config_from_path(config_path: &Path) -> Result<Option<AppConfig>> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return Ok(None);
        }
    };

    let config = parse_config(&contents)
        .map_err(|e| Error::configuration(format!("{}: {e}", config_path.display())))?;
    tracing::debug!("Loaded config from {}", config_path.display());
    Ok(Some(config))
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` of them.
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

/// Search `start` and its ancestors for the config file.
pub fn load_config_from(start: PathBuf) -> Result<AppConfig> {
    for dir in directory_ancestors(start, MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = try_load_config_from_path(&dir.join(CONFIG_FILE))? {
            return Ok(config);
        }
    }

    tracing::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(AppConfig::default())
}

/// Load configuration for the current directory.
pub fn load_config() -> Result<AppConfig> {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ancestors_stop_at_depth() {
        let dirs: Vec<PathBuf> =
            directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }

    #[test]
    fn test_ancestors_end_at_root() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn test_config_found_in_parent() {
        let root = TempDir::new().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE),
            "[paths]\ninput = \"korpus\"\n",
        )
        .unwrap();
        let nested = root.path().join("one").join("two");
        std::fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("korpus"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE), "[cloud]\nwidth = \"wide\"\n").unwrap();

        let err = load_config_from(root.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
