use shared::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to prepare static files: {0}")]
    StaticFiles(#[from] std::io::Error),
}
