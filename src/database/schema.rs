// Record store schema
// Applied on every start; each statement is CREATE ... IF NOT EXISTS.

pub const INITIAL_SCHEMA: &str = include_str!("../../migrations/001_initial_schema.sql");

pub const TABLES: [&str; 3] = ["patients", "equipment", "referrals"];
