use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::types::EngineConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("max_depth must be at least 1")]
    InvalidDepth,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load an engine config from a TOML file.
    pub fn load(path: &Path) -> Result<EngineConfig, ConfigError> {
        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;
        Self::parse(&s, &path.display().to_string())
    }

    /// Parse an engine config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<EngineConfig, ConfigError> {
        Self::parse(s, "<string>")
    }

    fn parse(s: &str, origin: &str) -> Result<EngineConfig, ConfigError> {
        let cfg: EngineConfig =
            toml::from_str(s).map_err(|e| ConfigError::ParseError(origin.to_string(), e))?;

        if cfg.max_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = ConfigLoader::from_toml_str("").unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.max_depth, 64);
    }

    #[test]
    fn max_depth_is_read() {
        let cfg = ConfigLoader::from_toml_str("max_depth = 8\n").unwrap();
        assert_eq!(cfg.max_depth, 8);
    }

    #[test]
    fn zero_depth_rejected() {
        let err = ConfigLoader::from_toml_str("max_depth = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDepth));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ConfigLoader::from_toml_str("depth = 3\n").unwrap_err();
        match err {
            ConfigError::ParseError(origin, _) => assert_eq!(origin, "<string>"),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }
}
