//! Application configuration for nbweave.
//!
//! User config lives at `~/.nbweave/nbweave.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NbweaveError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "nbweave.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".nbweave";

// ---------------------------------------------------------------------------
// Config structs (matching nbweave.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Fence language tags converted into executable code cells.
    #[serde(default = "default_code_languages")]
    pub code_languages: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            code_languages: default_code_languages(),
        }
    }
}

fn default_code_languages() -> Vec<String> {
    vec!["python".into(), "sql".into()]
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.nbweave/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| NbweaveError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.nbweave/nbweave.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| NbweaveError::input(path, e))?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| NbweaveError::config(format!("failed to parse {}: {e}", path.display())))?;

    if config.defaults.code_languages.is_empty() {
        return Err(NbweaveError::config(format!(
            "{}: code_languages must not be empty",
            path.display()
        )));
    }

    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| NbweaveError::output(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| NbweaveError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| NbweaveError::output(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("code_languages"));
        assert!(toml_str.contains("python"));
        assert!(toml_str.contains("sql"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.code_languages, vec!["python", "sql"]);
    }

    #[test]
    fn custom_code_languages() {
        let toml_str = r#"
[defaults]
code_languages = ["python", "r", "julia"]
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.code_languages.len(), 3);
        assert_eq!(config.defaults.code_languages[1], "r");
    }

    #[test]
    fn empty_code_languages_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nbweave.toml");
        std::fs::write(&path, "[defaults]\ncode_languages = []\n").expect("write");

        let result = load_config_from(&path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("must not be empty")
        );
    }

    #[test]
    fn missing_file_is_input_error() {
        let result = load_config_from(Path::new("/nonexistent/nbweave.toml"));
        assert!(matches!(result, Err(NbweaveError::Input { .. })));
    }
}
