pub mod alarms;
pub mod config;
pub mod crypto;
pub mod database;
pub mod error;
pub mod imaging;
pub mod pages;
pub mod predictions;

pub use error::AdminError;
