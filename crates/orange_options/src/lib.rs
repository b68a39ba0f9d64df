//! orange_options: orange.json parsing and compiler options.
//!
//! Parses the project file that lists source units and tunes the front end.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The default project file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "orange.json";

/// Front-end options, matching the orange.json `compilerOptions` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Bound on expression nesting. Falls back to the parser default.
    pub max_nesting_depth: Option<u32>,
}

/// The orange.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrangeConfig {
    pub files: Option<Vec<String>>,
    pub compiler_options: Option<CompilerOptions>,
}

impl OrangeConfig {
    /// The configured source files, resolved against the directory holding the config.
    pub fn resolved_files(&self, config_dir: &Path) -> Vec<PathBuf> {
        self.files
            .iter()
            .flatten()
            .map(|file| config_dir.join(file))
            .collect()
    }

    pub fn max_nesting_depth(&self) -> Option<u32> {
        self.compiler_options.as_ref().and_then(|opts| opts.max_nesting_depth)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid project file")]
    Json(#[from] serde_json::Error),
}

/// Parse an orange.json file from a string.
pub fn parse_config(content: &str) -> Result<OrangeConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse an orange.json file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<OrangeConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}
