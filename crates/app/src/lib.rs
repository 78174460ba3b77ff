//! Jobly application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use jobly_auth::{AuthBackend, AuthConfig};
use jobly_common::Config;
use jobly_jobs::{JobsRepositories, JobsState};
use sqlx::PgPool;

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    };

    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth: AuthBackend::new(auth_config),
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { concat!("Jobly API v", env!("CARGO_PKG_VERSION")) }),
        )
        .merge(jobly_jobs::routes().with_state(jobs_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
