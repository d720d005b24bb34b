use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::AdminError;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub server_host: String,
    pub server_port: u16,
    pub backup_file_name: String,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, AdminError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdminError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("DATABASE_PATH")
            .unwrap_or_else(|| "hospital_data.db".to_string())
            .into();

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AdminError::ConfigError(format!("Invalid SERVER_PORT: {}", e)))?;

        let backup_file_name = lookup("BACKUP_FILE_NAME")
            .unwrap_or_else(|| "hospital_data_backup.db".to_string());

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AdminError::ConfigError(format!("Invalid MAX_UPLOAD_BYTES: {}", e)))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(AppConfig {
            database_path,
            server_host,
            server_port,
            backup_file_name,
            max_upload_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
