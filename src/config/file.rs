//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::HasherConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".murmur3.yaml",
    ".murmur3.yml",
    "murmur3.yaml",
    "murmur3.yml",
];

/// Directory under the user config dir searched for config files.
const CONFIG_DIR_NAME: &str = "murmur3-digest";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided (returned as-is, even if it does not exist)
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/murmur3-digest/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join(CONFIG_DIR_NAME)))
    {
        return Some(path);
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read config file {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load a `HasherConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<HasherConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: HasherConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// Lenient: a file that cannot be loaded is logged and replaced by defaults.
/// Use [`load_config_file`] when a specific file must be honored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (HasherConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (HasherConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (HasherConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config
// ============================================================================

/// Generate an example config file with comments.
#[must_use]
pub fn generate_example_config() -> String {
    r#"# murmur3-digest configuration
# Place this file at .murmur3.yaml in your project root or
# ~/.config/murmur3-digest/murmur3.yaml
#
# The MURMUR3_SEED environment variable overrides the seed below.

# Seed for both hash lanes. An integer, or a quoted decimal / 0x-hex string.
# Digests are only comparable between hashers built with the same seed.
seed: 0
"#
    .to_string()
}
