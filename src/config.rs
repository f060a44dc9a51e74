use std::fs;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub runner_config: RunnerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_host() -> String {
    // demo surface, bind all interfaces
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_command() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "qwen3:8b".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            model: default_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_setup() {
        let config = Config::default();
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.system_config.port, 7860);
        assert!(!config.system_config.debug);
        assert_eq!(config.runner_config.command, "ollama");
        assert_eq!(config.runner_config.model, "qwen3:8b");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str(
            "system_config:\n  port: 9000\nrunner_config:\n  model: qwen3:4b\n",
        )
        .unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.runner_config.command, "ollama");
        assert_eq!(config.runner_config.model, "qwen3:4b");
    }
}
