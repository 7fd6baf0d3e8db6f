//! Configuration for native front ends
//!
//! An optional YAML file chooses where the file-backed store lives and which
//! slot it uses. The browser build never reads it.

use crate::storage::{validate_key, STORAGE_KEY};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "RECIPES_CONFIG";

/// Directory name used under the user's config and data directories
pub const APP_DIR_NAME: &str = "ocean-recipes";

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["recipes.yml", "recipes.yaml"];

/// Loaded configuration, its source path, and any problems hit on the way.
/// `source` is `None` when no file was found and the defaults apply.
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: RecipesConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecipesConfig {
    /// Directory holding the store's files
    pub storage_dir: Option<PathBuf>,
    /// Slot the collection is kept in
    pub storage_key: String,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl RecipesConfig {
    fn sanitize(mut self, warnings: &mut Vec<String>) -> Self {
        let key = self.storage_key.trim().to_string();
        if let Err(e) = validate_key(&key) {
            warnings.push(format!("{}; using '{}'", e, STORAGE_KEY));
            self.storage_key = STORAGE_KEY.to_string();
        } else {
            self.storage_key = key;
        }
        self
    }

    /// Directory for the file-backed store: the configured one (with a
    /// leading `~` expanded), else the user data directory, else the working
    /// directory.
    pub fn resolved_storage_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage_dir {
            return expand_home(dir);
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Replace a leading `~` component with the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Load configuration from disk, optionally forcing a specific path.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    let config = config.sanitize(&mut warnings);
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    log::debug!("Loaded config from {}", source.display());
                    return ConfigHandle {
                        config,
                        source: Some(source),
                        warnings,
                    };
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    ConfigHandle {
        config: RecipesConfig::default(),
        source: None,
        warnings,
    }
}

/// Parse YAML config text. An empty document yields the defaults.
pub fn parse_config(contents: &str) -> Result<RecipesConfig, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(RecipesConfig::default());
    }
    serde_yaml::from_str(contents)
}

/// Config file candidates to try, in priority order
fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(config_dir.join(APP_DIR_NAME).join(name));
        }
    }

    candidates
}
