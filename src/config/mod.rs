//! Configuration module for murmur3-digest.
//!
//! The only tunable is the seed. It can come from code, a YAML file, or the
//! `MURMUR3_SEED` environment variable, and is validated before a
//! [`crate::Hasher`] is built from it.
//!
//! # Quick Start
//!
//! ```rust
//! use murmur3_digest::config::{HasherConfig, Validatable};
//!
//! let config = HasherConfig::builder().seed_text("0x19").build();
//! assert!(config.is_valid());
//! assert_eq!(config.resolve_seed().unwrap(), 25);
//! ```
//!
//! # Configuration File
//!
//! Place a `.murmur3.yaml` file in your project root or `~/.config/murmur3-digest/`:
//!
//! ```yaml
//! seed: 25
//! ```

pub mod file;
mod types;
mod validation;

// Re-export main types
pub use types::{HasherConfig, HasherConfigBuilder, SeedValue, DEFAULT_SEED, SEED_ENV_VAR};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `HasherConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.murmur3.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(HasherConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}
