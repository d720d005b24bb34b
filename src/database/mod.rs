pub mod models;
pub mod queries;
pub mod schema;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::AdminError;
use models::*;
use queries::Queries;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (creating if needed) the file-backed store at `path`.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, AdminError> {
        let path = path.as_ref().to_path_buf();
        // Rollback journal keeps the main file complete after every commit,
        // which the byte-for-byte backup relies on.
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        info!("Opened record store at {}", path.display());
        Ok(Database {
            pool,
            path: Some(path),
        })
    }

    /// Private in-memory store. A single connection keeps every query on the same database.
    pub async fn new_in_memory() -> Result<Self, AdminError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let database = Database { pool, path: None };
        database.run_migrations().await?;
        Ok(database)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<(), AdminError> {
        sqlx::query(schema::INITIAL_SCHEMA)
            .execute(&self.pool)
            .await?;
        debug!("Record store schema ensured");
        Ok(())
    }

    /// Names of the record tables present in the store.
    pub async fn table_names(&self) -> Result<Vec<String>, AdminError> {
        let rows = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get::<String, _>("name")).collect())
    }

    pub async fn insert_patient(&self, patient: &NewPatient) -> Result<PatientRecord, AdminError> {
        Queries::insert_patient(&self.pool, patient).await
    }

    pub async fn insert_equipment(
        &self,
        update: &NewEquipmentStatus,
    ) -> Result<EquipmentRecord, AdminError> {
        Queries::insert_equipment(&self.pool, update).await
    }

    pub async fn insert_referral(&self, referral: &NewReferral) -> Result<ReferralRecord, AdminError> {
        Queries::insert_referral(&self.pool, referral).await
    }

    pub async fn list_patients(&self) -> Result<Vec<PatientRecord>, AdminError> {
        Queries::list_patients(&self.pool).await
    }

    pub async fn list_equipment(&self) -> Result<Vec<EquipmentRecord>, AdminError> {
        Queries::list_equipment(&self.pool).await
    }

    pub async fn list_referrals(&self) -> Result<Vec<ReferralRecord>, AdminError> {
        Queries::list_referrals(&self.pool).await
    }

    pub async fn latest_equipment_status(&self) -> Result<Vec<EquipmentRecord>, AdminError> {
        Queries::latest_equipment_status(&self.pool).await
    }

    /// Read the store file byte-for-byte.
    ///
    /// A read transaction holds SQLite's shared lock for the duration of the
    /// copy so no writer can commit halfway through.
    pub async fn backup_bytes(&self) -> Result<Vec<u8>, AdminError> {
        let path = self.path.as_ref().ok_or_else(|| {
            AdminError::BackupUnavailable("record store is not file-backed".to_string())
        })?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT COUNT(*) FROM sqlite_master")
            .fetch_one(&mut *tx)
            .await?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AdminError::BackupError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        tx.commit().await?;
        info!("Backup snapshot taken ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Write a byte-for-byte backup to `dest`, returning the number of bytes written.
    pub async fn backup_to(&self, dest: impl AsRef<Path>) -> Result<u64, AdminError> {
        let bytes = self.backup_bytes().await?;
        tokio::fs::write(dest.as_ref(), &bytes).await?;
        Ok(bytes.len() as u64)
    }
}
