//! Jobs domain: job listings, filtering, and admin mutation

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use api::{routes, JobsState};
pub use domain::entities::*;
pub use repository::{JobRepository, JobsRepositories};
