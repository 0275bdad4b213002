//! TOML config file loading and creation.

use crate::schema::FroggyConfig;
use crate::validation;
use froggy_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<FroggyConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: FroggyConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    // Validate and warn on errors, but still return a working config
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(FroggyConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/froggy/config.toml`
/// On Linux: `~/.config/froggy/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<FroggyConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(FroggyConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("froggy").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Froggy Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[chat]
# endpoint = "http://localhost:11434"
# model = "phi3"
# persona = "You are a friendly chatbot who always responds in the style of a frog"
# timeout_secs = 60           # 1-600

[speech]
# default_duration_ms = 5000  # facts and untimed messages, 100-600000
# reading_wpm = 130           # chat reply timing, 30-1000
# wait_message = "Wait... I'm thinking..."
# wait_duration_ms = 2000     # 100-60000
# reminder_duration_ms = 2000 # 100-600000

[style]
# text = "#ffffff"
# panel = "rgba(0,0,0,180)"
# border = "#ffffff"
# font_size = 15              # 8-72
# border_radius = 15          # 0-40
# padding = 10                # 0-40
# border_width = 2            # 0-10

[companion]
# name = "Froggy"
# image = "assets/frog.png"
# prompt_placeholder = "Ask for anything"
# origin_x = 0.0
# origin_y = 0.0

# One [[reminders]] block per reminder. This list replaces the default
# hourly break reminder when present.
[[reminders]]
text = "It's time to take a break!"
interval_ms = 3600000

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_froggy_config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[chat]
model = "llama3"

[speech]
reading_wpm = 180
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.chat.model, "llama3");
        assert_eq!(config.speech.reading_wpm, 180);
        // Defaults preserved
        assert_eq!(config.chat.endpoint, "http://localhost:11434");
        assert_eq!(config.speech.wait_duration_ms, 2000);
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_config_with_invalid_values_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[speech]
reading_wpm = 5
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        // Should fall back to default since validation fails
        assert_eq!(config.speech.reading_wpm, 130);
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("froggy").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.chat.model, "phi3");
        assert_eq!(config.reminders.len(), 1);
        assert_eq!(config.reminders[0].interval_ms, 3_600_000);
    }

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: FroggyConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.chat.model, "phi3");
        assert_eq!(config.reminders[0].text, "It's time to take a break!");
    }

    #[test]
    fn default_config_path_is_reasonable() {
        // This may not work in all CI environments, but should work locally
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("froggy"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
