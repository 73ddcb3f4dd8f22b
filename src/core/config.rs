// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Web Interface
    pub web_enabled: bool,
    pub web_port: u16,
    pub web_address: String,

    // Clipboard
    pub clipboard_clear_secs: Option<u64>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation (matches the UI slider: 8-64, default 16)
            default_password_length: 16,
            min_password_length: 8,
            max_password_length: 64,

            // Web Interface
            web_enabled: true,
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Clipboard
            clipboard_clear_secs: None,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("MIN_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.min_password_length = length;
            }
        }

        if let Ok(val) = env::var("MAX_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.max_password_length = length;
            }
        }

        // Web Interface
        if let Ok(val) = env::var("WEB_ENABLED") {
            if let Ok(enabled) = val.parse() {
                config.web_enabled = enabled;
            }
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Clipboard
        if let Ok(val) = env::var("CLIPBOARD_CLEAR_SECONDS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.clipboard_clear_secs = if secs == 0 { None } else { Some(secs) };
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    /// Clamp a requested length into the configured bounds.
    pub fn clamp_length(&self, length: usize) -> usize {
        length.clamp(self.min_password_length, self.max_password_length)
    }
}
