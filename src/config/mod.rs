use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    #[serde(default = "default_font_regular")]
    pub font_regular: String,
    #[serde(default = "default_font_bold")]
    pub font_bold: String,
}

fn default_storage_dir() -> String {
    Config::config_dir()
        .join("escalas")
        .to_string_lossy()
        .to_string()
}
fn default_font_regular() -> String {
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string()
}
fn default_font_bold() -> String {
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            font_regular: default_font_regular(),
            font_bold: default_font_bold(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rplantao")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rplantao")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rplantao.conf")
    }

    /// Storage directory with `~` expanded.
    pub fn storage_path(&self) -> PathBuf {
        expand_tilde(&self.storage_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration file and storage directory
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = Config::default();
        if let Some(store) = custom_store {
            config.storage_dir = store;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?).map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let store = config.storage_path();
        fs::create_dir_all(&store)?;
        println!("✅ Storage:     {:?}", store);

        Ok(config)
    }
}
