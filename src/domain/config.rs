use std::path::Path;

use serde::Deserialize;

use crate::{domain::text::OverflowPolicy, terminal::ColorChoice};

/// Settings for an investigation.
///
/// Every field has a default, so a missing file or an empty one yields the
/// same game as running without a configuration at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// What to do with a name or clue longer than its limit.
    pub overflow: OverflowPolicy,

    /// Whether to colour terminal output.
    pub color: ColorChoice,
}

/// Errors raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The file is not valid TOML for this configuration.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }
}

/// The serialized versions of the configuration.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        overflow: OverflowPolicy,

        #[serde(default)]
        color: ColorChoice,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { overflow, color } => Self { overflow, color },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\noverflow = \"truncate\"\ncolor = \"never\"\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.overflow, OverflowPolicy::Truncate);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
        assert!(error.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\noverflow = \"explode\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn load_rejects_unknown_version() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"2\"\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }
}
