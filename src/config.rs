// src/config.rs
//! Unified configuration management - eliminates duplicate config loading

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub uploads_path: PathBuf,
    pub database_path: PathBuf,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let environment = Self::load_environment()?;

        Ok(Self { environment })
    }

    /// Load environment configuration
    fn load_environment() -> Result<EnvironmentConfig> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading environment configuration for: {}", env);

        let base_dir = if env == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        let uploads_path = std::env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| base_dir.join("uploads"));

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| base_dir.join("voxhire.db"));

        Ok(EnvironmentConfig {
            uploads_path,
            database_path,
        })
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        crate::utils::ensure_dir_exists(&self.environment.uploads_path).await?;

        // Ensure database directory exists
        if let Some(db_parent) = self.environment.database_path.parent() {
            crate::utils::ensure_dir_exists(db_parent).await?;
        }

        Ok(())
    }
}
