// Configuration loading module

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::managers::TabStripConfigYaml;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(rename = "tab_strips")]
    pub tab_strips: HashMap<String, TabStripConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

impl AppConfig {
    /// Look up a tab strip config by handle name (HWND)
    pub fn tab_strip(&self, hwnd: &str) -> Result<&TabStripConfigYaml, ConfigError> {
        self.tab_strips
            .values()
            .find(|config| config.hwnd == hwnd)
            .ok_or_else(|| {
                let mut available: Vec<&str> = self.tab_strips.values().map(|c| c.hwnd.as_str()).collect();
                available.sort_unstable();
                ConfigError::MissingTabStrip {
                    hwnd: hwnd.to_string(),
                    available: available.join(", "),
                }
            })
    }
}

/// Path of the bundled config.yaml
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents)
}
