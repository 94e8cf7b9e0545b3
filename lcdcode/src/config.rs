use std::path::PathBuf;

/// Default input list, relative to the working directory.
pub const DEFAULT_INPUT: &str = "inputs/test_input.txt";
/// Default directory images are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Locations for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// File with one 4-digit identifier per line.
    pub input: PathBuf,
    /// Directory receiving `<id>.png` files. Created if absent.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(feature = "serde")]
impl Config {
    /// Parse a TOML config. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Config, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("inputs/test_input.txt"));
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_overrides_some_keys() {
        let config = Config::from_toml_str("output_dir = \"test_outputs\"\n").unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output_dir, PathBuf::from("test_outputs"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(Config::from_toml_str("inputFile = \"x\"\n").is_err());
    }
}
