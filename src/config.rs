use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::TokenStrategy;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Outcome of the config search, logged once logging is up
#[derive(Debug)]
pub(crate) enum ConfigNote {
    Loaded(PathBuf),
    Problem(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) catalog: Option<PathBuf>,
    #[serde(default)]
    pub(crate) strategy: Option<TokenStrategy>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default)]
    pub(crate) api_base: Option<String>,
    /// Name of the environment variable holding the API key
    #[serde(default)]
    pub(crate) api_key_env: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Default summary output path
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
}

impl Config {
    /// Load the first readable config file.
    ///
    /// Runs before logging is set up, so what happened is returned for the caller
    /// to log once the subscriber exists.
    pub(crate) fn load() -> (Self, Vec<ConfigNote>) {
        let mut notes = Vec::new();

        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    notes.push(ConfigNote::Problem(format!(
                        "Failed to read {}: {e}",
                        path.display()
                    )));
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(config) => {
                    notes.push(ConfigNote::Loaded(path));
                    return (config, notes);
                }
                Err(e) => {
                    notes.push(ConfigNote::Problem(format!(
                        "Failed to parse {}: {e}",
                        path.display()
                    )));
                }
            }
        }

        (Self::default(), notes)
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/docscope/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("docscope").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/docscope/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("docscope").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.docscope.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".docscope.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_not_empty() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("docscope")));
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
model = "gpt-4o"
catalog = "/etc/docscope/models.json"
strategy = "char-ratio"
locale = "de"
color = "never"
json = true
api_base = "http://localhost:11434/v1"
api_key_env = "LOCAL_KEY"
timeout_secs = 30
output = "summary.md"
"#,
        )
        .unwrap();
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.strategy, Some(TokenStrategy::CharRatio));
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
        assert!(config.json);
        assert!(!config.debug);
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.output, Some(PathBuf::from("summary.md")));
    }

    #[test]
    fn parse_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert!(config.model.is_none());
        assert!(config.strategy.is_none());
        assert!(!config.json);
    }

    #[test]
    fn parse_rejects_unknown_strategy() {
        assert!(Config::parse(r#"strategy = "tiktoken""#).is_err());
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert!(Config::parse(r#"modle = "gpt-4o""#).is_err());
    }
}
