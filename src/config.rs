use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScheduleConfig {
    /// Offset from UTC used to decide which weekday it is
    #[serde(default)]
    pub utc_offset_hours: i8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Recipe catalog JSON, the embedded catalog is used when unset
    #[serde(default)]
    pub recipes: Option<String>,
    /// Weekly schedule JSON, the embedded schedule is used when unset
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            recipes: None,
            schedule: None,
            images_dir: default_images_dir(),
        }
    }
}

fn default_images_dir() -> String {
    "public/images".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_favorite_label")]
    pub favorite_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            favorite_label: default_favorite_label(),
        }
    }
}

fn default_title() -> String {
    "This Week".to_string()
}

fn default_subtitle() -> String {
    "Home Cooking Kickoff".to_string()
}

fn default_favorite_label() -> String {
    "Home Chef Favorite".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWEEK__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults cover everything
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWEEK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !(-12..=14).contains(&self.schedule.utc_offset_hours) {
            return Err("schedule.utc_offset_hours must be between -12 and 14".to_string());
        }
        if self.site.title.trim().is_empty() {
            return Err("site.title must not be empty".to_string());
        }
        Ok(())
    }
}
