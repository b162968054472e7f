//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether responses are brotli/gzip compressed on the fly, from `COMPRESSION`.
    /// Accepts `1/true/on/yes` and `0/false/off/no`.
    pub compression: bool,

    /// Whether `/pkg` serves pre-built `.br`/`.gz` files next to the
    /// originals, from `PRECOMPRESSED_ASSETS`
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| match lookup(key) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring invalid {key} value {raw:?}");
                true
            }),
            None => true,
        };

        Self {
            compression: flag("COMPRESSION"),
            precompressed_assets: flag("PRECOMPRESSED_ASSETS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

/// Parse a boolean environment flag
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("COMPRESSION", "off"),
            ("PRECOMPRESSED_ASSETS", "false"),
        ]));
        assert!(!config.compression);
        assert!(!config.precompressed_assets);
    }

    #[test]
    fn test_config_with_partial_fields() {
        let config = Config::from_lookup(lookup(&[("PRECOMPRESSED_ASSETS", "0")]));
        assert!(config.compression);
        assert!(!config.precompressed_assets);
    }

    #[test]
    fn test_invalid_compression_keeps_default() {
        let config = Config::from_lookup(lookup(&[("COMPRESSION", "maybe")]));
        assert!(config.compression);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
