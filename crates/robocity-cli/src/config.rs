//! Console configuration, loaded from an optional YAML file.

use std::path::Path;

use anyhow::{Context, Result};
use robocity_core::EngineConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Name the robot speaks under
    #[serde(default = "default_robot_name")]
    pub robot_name: String,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Prefix of every listed item
    #[serde(default = "default_item_indent")]
    pub item_indent: String,

    #[serde(default = "default_line_separator")]
    pub line_separator: String,

    /// Fuel and costs for the run
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_robot_name() -> String {
    "WALL·E".to_string()
}
fn default_prompt() -> String {
    "WALL·E> ".to_string()
}
fn default_item_indent() -> String {
    "   ".to_string()
}
fn default_line_separator() -> String {
    if cfg!(windows) { "\r\n" } else { "\n" }.to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            robot_name: default_robot_name(),
            prompt: default_prompt(),
            item_indent: default_item_indent(),
            line_separator: default_line_separator(),
            engine: EngineConfig::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: ConsoleConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// The file at `path` if one was given, the defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: ConsoleConfig =
            serde_yaml::from_str("robot_name: EVE\nengine:\n  initial_fuel: 30\n").unwrap();
        assert_eq!(config.robot_name, "EVE");
        assert_eq!(config.prompt, "WALL·E> ");
        assert_eq!(config.item_indent, "   ");
        assert_eq!(config.engine.initial_fuel, 30);
        assert_eq!(config.engine.move_cost, 5);
    }

    #[test]
    fn missing_file_is_an_error_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::load(&dir.path().join("robocity.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config"));
        assert_eq!(ConsoleConfig::load_or_default(None).unwrap(), ConsoleConfig::default());
    }
}
