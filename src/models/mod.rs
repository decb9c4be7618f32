//! Core data models for the festival site.
//!
//! Rows map to database tables via `sqlx::FromRow` and serialize as JSON
//! via `serde` using the field names the submission page sends.

pub mod file_metadata;
