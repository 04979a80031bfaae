use crate::errors::ConfigError;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, info, warn};

const USER_CONFIG_DIR: &str = ".config/javags";
const USER_CONFIG_FILE_NAME: &str = "config.toml";

// Selector behavior
#[derive(Deserialize, Debug, Clone)]
pub struct SelectorConfig {
    /// Confirm every field without prompting, as if --all were passed.
    #[serde(default)]
    pub assume_all: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { assume_all: false }
    }
}

// Terminal output behavior
#[derive(Deserialize, Debug, Clone)]
pub struct OutputConfig {
    /// Colored prompt and dry-run output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

// Partial-load helper structs
#[derive(Deserialize, Debug, Default, Clone)]
struct PartialSelectorConfig {
    #[serde(default)]
    assume_all: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
struct PartialOutputConfig {
    #[serde(default)]
    color: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
struct PartialAppConfig {
    selector: Option<PartialSelectorConfig>,
    output: Option<PartialOutputConfig>,
}

// Overall application configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Loads `~/.config/javags/config.toml`, falling back to defaults when
    /// the file does not exist. A present-but-malformed file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = match Self::user_config_path() {
            Some(path) => path,
            None => {
                warn!("Could not determine home directory; using default configuration");
                return Ok(Self::default());
            }
        };

        if !config_path.exists() {
            debug!(
                "No configuration file at {:?}; using defaults",
                config_path
            );
            return Ok(Self::default());
        }

        Self::load_from_file(&config_path)
    }

    fn user_config_path() -> Option<PathBuf> {
        let home = match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => dirs::home_dir()?,
        };
        Some(home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE_NAME))
    }

    fn load_from_file(config_path: &std::path::Path) -> Result<Self, ConfigError> {
        info!("Reading configuration file: {:?}", config_path);
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::FileRead(config_path.to_string_lossy().to_string(), e)
        })?;

        Self::from_toml_str(&config_content)
            .map_err(|e| ConfigError::TomlParse(config_path.to_string_lossy().to_string(), e))
    }

    /// Parses a TOML document, merging present keys over defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let partial: PartialAppConfig = toml::from_str(content)?;

        let defaults = Self::default();
        let selector = match partial.selector {
            Some(s) => SelectorConfig {
                assume_all: s.assume_all.unwrap_or(defaults.selector.assume_all),
            },
            None => defaults.selector,
        };
        let output = match partial.output {
            Some(o) => OutputConfig {
                color: o.color.unwrap_or(defaults.output.color),
            },
            None => defaults.output,
        };

        Ok(Self { selector, output })
    }
}
