//! Configuration management for Folio
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    COMPACT_DEFAULT_WIDTH, CONFIG_GENERATED, DEFAULT_ADMIN_PASSWORD, DEFAULT_API_KEY_ENV, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_GENERATOR_BASE_URL, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH,
    SIDEBAR_MIN_WIDTH,
};
use crate::entities::Category;
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub admin: AdminConfig,
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Category tab selected on startup ("ALL" or a category label)
    pub default_category: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Below this terminal width the sidebar is hidden behind a menu overlay
    pub compact_width: u16,
    /// "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Admin mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Password that unlocks editing. Demo gate only, not a security boundary.
    pub password: String,
}

/// Description generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Model name sent with each request
    pub model: String,
    /// API base URL, without trailing slash
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app log viewer
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_category: Category::All.label().to_string(),
            mouse_enabled: true,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            compact_width: COMPACT_DEFAULT_WIDTH,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GENERATOR_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Parsed startup tab. Falls back to `ALL` for an unknown label.
    pub fn start_category(&self) -> Category {
        self.default_category.parse().unwrap_or_default()
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("folio.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("folio").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if let Err(e) = self.ui.default_category.parse::<Category>() {
            anyhow::bail!("Invalid default_category: {}", e);
        }

        if self.admin.password.is_empty() {
            anyhow::bail!("admin password cannot be empty");
        }

        self.validate_generator()?;
        self.logging.level_filter()?;

        Ok(())
    }

    fn validate_generator(&self) -> Result<()> {
        let generator = &self.generator;
        if generator.api_key_env.is_empty() {
            anyhow::bail!("generator api_key_env cannot be empty");
        }
        if generator.model.is_empty() {
            anyhow::bail!("generator model cannot be empty");
        }
        if generator.base_url.is_empty() {
            anyhow::bail!("generator base_url cannot be empty");
        }
        if generator.request_timeout_secs == 0 || generator.connect_timeout_secs == 0 {
            anyhow::bail!("generator timeouts must be greater than zero");
        }
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Folio Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("folio"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
