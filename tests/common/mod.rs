#![allow(dead_code)]

use std::io::Cursor;

use hospital_admin::config::AppConfig;
use hospital_admin::database::models::*;
use hospital_admin::database::Database;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use tempfile::TempDir;

/// Setup an in-memory SQLite database for testing
pub async fn setup_test_db() -> Database {
    Database::new_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Setup a file-backed database inside a fresh temporary directory
pub async fn setup_file_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let database = Database::new(dir.path().join("hospital_data.db"))
        .await
        .expect("Failed to open file database");
    database
        .run_migrations()
        .await
        .expect("Failed to create tables");
    (dir, database)
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None).expect("default config")
}

pub fn test_patient(name: &str, password: &str) -> NewPatient {
    NewPatient::register(name, 37, Gender::Female, Department::Opd, password)
}

/// A flat red PNG of the given size
pub fn red_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([255, 0, 0]));
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buffer, ImageOutputFormat::Png)
        .expect("Failed to encode PNG");
    buffer.into_inner()
}
