use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::logger::LogLevel;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub human_marker: char,
    pub computer_marker: char,
    pub log_level: LogLevel,
    #[serde(default)]
    pub show_search_summary: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.human_marker.is_whitespace() || self.computer_marker.is_whitespace() {
            return Err("Markers must be visible characters".to_string());
        }
        if self.human_marker == self.computer_marker {
            return Err(format!(
                "Human and computer markers must differ (both are '{}')",
                self.human_marker
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_marker: 'O',
            computer_marker: 'X',
            log_level: LogLevel::Info,
            show_search_summary: false,
        }
    }
}
