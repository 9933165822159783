//! Shared configuration and domain types for the hivecast workspace.

use thiserror::Error;

mod app_config;
mod config;
mod posts;
mod themes;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use posts::{
    EnabledPlatforms, GeneratedContent, ImageReference, MicroPost, PinCopy, Platform,
    PublishResult, ThreadPost,
};
pub use themes::{Theme, ThemeCatalog};

/// Errors raised while loading configuration or the theme catalog at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read themes file {path}: {source}")]
    ThemesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse themes file: {0}")]
    ThemesFileParse(#[from] serde_yaml::Error),

    #[error("{0}")]
    Validation(String),
}
