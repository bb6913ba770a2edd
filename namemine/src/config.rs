//! Configuration loading for extraction thresholds.
//!
//! Settings are read from a `.namemine.toml` file or from a `[tool.namemine]`
//! table in `pyproject.toml`, searching upward from the scanned path. Every
//! field is optional; anything unset falls back to the tuned defaults in
//! [`crate::constants`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::CONFIG_FILENAME;
use crate::splitter::SplitterPolicy;

const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The main configuration section for namemine.
    #[serde(default)]
    pub namemine: ExtractorConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

/// Thresholds and switches controlling extraction and splitting.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ExtractorConfig {
    /// Minimum length for a name to be kept (shorter names are noise).
    pub min_name_length: Option<usize>,
    /// Minimum length for a comment chunk to be kept.
    pub min_comment_length: Option<usize>,
    /// Minimum length for a string literal to be kept.
    pub min_string_length: Option<usize>,
    /// Minimum length for a split component to be counted.
    pub min_component_length: Option<usize>,
    /// Maximum length for a split component to be counted.
    pub max_component_length: Option<usize>,
    /// Which camel-case splitting policy to apply.
    pub splitter: Option<SplitterPolicy>,
    /// Extra names to ignore on top of the built-in list.
    pub extra_ignorable_names: Option<Vec<String>>,
    /// List of folders to exclude when walking repositories.
    pub exclude_folders: Option<Vec<String>>,
}

impl ExtractorConfig {
    /// Minimum name length, defaulting to 3.
    #[must_use]
    pub fn min_name_length(&self) -> usize {
        self.min_name_length.unwrap_or(3)
    }

    /// Minimum comment length, defaulting to 4.
    #[must_use]
    pub fn min_comment_length(&self) -> usize {
        self.min_comment_length.unwrap_or(4)
    }

    /// Minimum string-literal length, defaulting to 6.
    #[must_use]
    pub fn min_string_length(&self) -> usize {
        self.min_string_length.unwrap_or(6)
    }

    /// Minimum component length, defaulting to 1.
    #[must_use]
    pub fn min_component_length(&self) -> usize {
        self.min_component_length.unwrap_or(1)
    }

    /// Maximum component length, defaulting to 30.
    #[must_use]
    pub fn max_component_length(&self) -> usize {
        self.max_component_length.unwrap_or(30)
    }

    /// Splitting policy, defaulting to [`SplitterPolicy::Safe`].
    #[must_use]
    pub fn splitter(&self) -> SplitterPolicy {
        self.splitter.unwrap_or(SplitterPolicy::Safe)
    }
}

#[derive(Debug, Deserialize, Clone)]
struct PyProject {
    tool: ToolConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct ToolConfig {
    namemine: ExtractorConfig,
}

impl Config {
    /// Loads configuration by searching upward from `path` for a
    /// `.namemine.toml` or a `pyproject.toml` with a `[tool.namemine]` table.
    ///
    /// Returns defaults when nothing is found or a candidate fails to parse.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let namemine_toml = current.join(CONFIG_FILENAME);
            if namemine_toml.exists() {
                if let Ok(content) = fs::read_to_string(&namemine_toml) {
                    if let Ok(mut config) = toml::from_str::<Self>(&content) {
                        config.config_file_path = Some(namemine_toml);
                        return config;
                    }
                }
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if pyproject_toml.exists() {
                if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                    if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                        return Self {
                            namemine: pyproject.tool.namemine,
                            config_file_path: Some(pyproject_toml),
                        };
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_thresholds() {
        let config = ExtractorConfig::default();
        assert_eq!(config.min_name_length(), 3);
        assert_eq!(config.min_comment_length(), 4);
        assert_eq!(config.min_string_length(), 6);
        assert_eq!(config.min_component_length(), 1);
        assert_eq!(config.max_component_length(), 30);
        assert_eq!(config.splitter(), SplitterPolicy::Safe);
    }

    #[test]
    fn loads_namemine_toml_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[namemine]\nmin_name_length = 5\nsplitter = \"simple\"\n",
        )
        .unwrap();
        let nested = dir.path().join("src").join("pkg");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.namemine.min_name_length(), 5);
        assert_eq!(config.namemine.splitter(), SplitterPolicy::Simple);
        // Unset keys keep their defaults.
        assert_eq!(config.namemine.min_string_length(), 6);
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn loads_pyproject_tool_table() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pyproject.toml"),
            "[tool.namemine]\nmax_component_length = 20\n",
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.namemine.max_component_length(), 20);
    }

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.config_file_path.is_none());
        assert_eq!(config.namemine.min_name_length(), 3);
    }
}
