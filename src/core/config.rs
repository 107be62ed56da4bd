// src/core/config.rs
use std::env;
use log::LevelFilter;

// Configuration for the string utilities
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Hashing
    pub password_salt: String,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Hashing
            password_salt: String::new(),

            // Password Generation
            default_password_length: 16,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    // Load configuration from any key lookup, falling back to defaults
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Hashing
        if let Some(salt) = lookup("PASSWORD_SALT") {
            config.password_salt = salt;
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}", val, config.default_password_length),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}
