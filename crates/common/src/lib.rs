//! Shared utilities, configuration, and error handling for Jobly
//!
//! This crate provides common functionality used across the Jobly application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Partial-update SQL clause construction
//! - Validating request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod sql;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
pub use sql::{build_set_clause, PartialUpdate};
