//! Configuration types for murmur3-digest.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::validation::ConfigError;

/// Seed used when nothing else is configured.
pub const DEFAULT_SEED: u64 = 0;

/// Environment variable that overrides the configured seed.
pub const SEED_ENV_VAR: &str = "MURMUR3_SEED";

// ============================================================================
// Hasher Configuration
// ============================================================================

/// Configuration for constructing a [`crate::Hasher`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HasherConfig {
    /// Seed for both hash lanes; an integer, or a decimal / `0x`-hex string
    pub seed: SeedValue,
}

impl HasherConfig {
    /// Create a new `HasherConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `HasherConfig` builder.
    #[must_use]
    pub fn builder() -> HasherConfigBuilder {
        HasherConfigBuilder::default()
    }

    /// Resolve the configured seed to its numeric value.
    pub fn resolve_seed(&self) -> Result<u64, ConfigError> {
        self.seed.resolve().map_err(|message| ConfigError {
            field: "seed".to_string(),
            message,
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` in place of the process environment.
    ///
    /// A present override replaces the seed as-is; it is validated along with
    /// the rest of the config rather than being dropped when malformed.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SEED_ENV_VAR) {
            tracing::debug!("Seed overridden by {}", SEED_ENV_VAR);
            self.seed = SeedValue::Text(raw);
        }
    }
}

// ============================================================================
// Seed Value
// ============================================================================

/// A seed as written in a config file or environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SeedValue {
    /// A plain integer
    Number(u64),
    /// Decimal digits or a `0x`-prefixed hexadecimal literal
    Text(String),
}

impl Default for SeedValue {
    fn default() -> Self {
        Self::Number(DEFAULT_SEED)
    }
}

impl From<u64> for SeedValue {
    fn from(seed: u64) -> Self {
        Self::Number(seed)
    }
}

impl SeedValue {
    /// Resolve to a `u64`, or a message describing why the text is not one.
    pub fn resolve(&self) -> Result<u64, String> {
        match self {
            Self::Number(seed) => Ok(*seed),
            Self::Text(text) => parse_seed(text),
        }
    }
}

fn parse_seed(text: &str) -> Result<u64, String> {
    let trimmed = text.trim().replace('_', "");
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|e| format!("'{text}' is not an unsigned 64-bit seed: {e}"))
}

// ============================================================================
// Builder for HasherConfig
// ============================================================================

/// Builder for [`HasherConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct HasherConfigBuilder {
    config: HasherConfig,
}

impl HasherConfigBuilder {
    /// Set the seed.
    pub fn seed(mut self, seed: impl Into<SeedValue>) -> Self {
        self.config.seed = seed.into();
        self
    }

    /// Set the seed from its textual form.
    pub fn seed_text(mut self, seed: impl Into<String>) -> Self {
        self.config.seed = SeedValue::Text(seed.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> HasherConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_zero() {
        assert_eq!(HasherConfig::default().resolve_seed().unwrap(), 0);
    }

    #[test]
    fn test_parse_seed_forms() {
        assert_eq!(parse_seed("25"), Ok(25));
        assert_eq!(parse_seed(" 38 "), Ok(38));
        assert_eq!(parse_seed("0x19"), Ok(25));
        assert_eq!(parse_seed("0XFF"), Ok(255));
        assert_eq!(parse_seed("0xffff_ffff_ffff_ffff"), Ok(u64::MAX));
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("0x").is_err());
        assert!(parse_seed("seed").is_err());
        assert!(parse_seed("18446744073709551616").is_err());
    }

    #[test]
    fn test_builder() {
        let config = HasherConfig::builder().seed(25).build();
        assert_eq!(config.seed, SeedValue::Number(25));

        let config = HasherConfig::builder().seed_text("0x26").build();
        assert_eq!(config.resolve_seed().unwrap(), 38);
    }

    #[test]
    fn test_resolve_seed_names_field() {
        let err = HasherConfig::builder()
            .seed_text("nope")
            .build()
            .resolve_seed()
            .unwrap_err();
        assert_eq!(err.field, "seed");
        assert!(err.message.contains("nope"));
    }

    #[test]
    fn test_env_override() {
        let mut config = HasherConfig::builder().seed(1).build();
        config.apply_env_overrides_from(|key| (key == SEED_ENV_VAR).then(|| "0x10".to_string()));
        assert_eq!(config.resolve_seed().unwrap(), 16);

        let mut config = HasherConfig::builder().seed(1).build();
        config.apply_env_overrides_from(|_| None);
        assert_eq!(config.resolve_seed().unwrap(), 1);
    }

    #[test]
    fn test_seed_value_serde_forms() {
        let config: HasherConfig = serde_json::from_str(r#"{"seed": 25}"#).unwrap();
        assert_eq!(config.seed, SeedValue::Number(25));

        let config: HasherConfig = serde_json::from_str(r#"{"seed": "0x19"}"#).unwrap();
        assert_eq!(config.resolve_seed().unwrap(), 25);

        let config: HasherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HasherConfig::default());
    }
}
