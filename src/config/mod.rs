use crate::errors::{AppError, AppResult};
use crate::store::SessionStore;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub log_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Self::log_file_default().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("studylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".studylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studylog.conf")
    }

    /// Default location of the session log
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("studylog.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse {}: {e}", path.display()))
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Resolved session log path, with `~` expanded
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Initialize the configuration file and an empty, schema-initialized
    /// session log
    pub fn init_all(custom_log: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();

        // Log path: user provided or default
        let log_path = match custom_log {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::log_file_default(),
        };

        let config = Config {
            log_file: log_path.to_string_lossy().to_string(),
            separator_char: default_separator_char(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file:  {:?}", Self::config_file());
        }

        // Create the empty session log with its header if not exists
        SessionStore::new(&log_path).init_schema()?;
        println!("✅ Session log:  {:?}", log_path);

        Ok(())
    }
}
