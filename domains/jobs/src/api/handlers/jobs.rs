//! Job listing API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use jobly_auth::AdminUser;
use jobly_common::{Error, Result, ValidatedJson, ValidatedPath, ValidatedQuery};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::api::middleware::JobsState;
use crate::domain::entities::{
    parse_equity, Job, JobDetail, JobFilter, JobListing, JobPatch, NewJob,
};

/// Single-job envelope: `{ "job": ... }`
#[derive(Debug, Serialize)]
pub struct JobResponse<T> {
    pub job: T,
}

/// Listing envelope: `{ "jobs": [...] }`
#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    pub deleted: i32,
}

/// Request for creating a job
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(range(min = 0))]
    pub salary: Option<i32>,

    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<String>,

    #[validate(length(min = 1, max = 25))]
    pub company_handle: String,
}

/// Request for updating a job. Unknown keys, including `companyHandle`,
/// are rejected before reaching the repository.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,

    #[validate(range(min = 0))]
    pub salary: Option<i32>,

    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<String>,
}

/// Query parameters for listing jobs
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct JobSearchParams {
    #[validate(range(min = 0))]
    pub min_salary: Option<i32>,

    /// Only the literal `"true"` enables the filter
    pub has_equity: Option<String>,

    #[validate(length(min = 1))]
    pub title: Option<String>,
}

fn validate_equity(equity: &str) -> std::result::Result<(), ValidationError> {
    parse_equity(equity)
        .map(|_| ())
        .map_err(|_| ValidationError::new("equity_range"))
}

fn parse_optional_equity(equity: Option<&str>) -> Result<Option<rust_decimal::Decimal>> {
    equity.map(parse_equity).transpose()
}

impl TryFrom<CreateJobRequest> for NewJob {
    type Error = Error;

    fn try_from(req: CreateJobRequest) -> Result<Self> {
        Ok(NewJob {
            equity: parse_optional_equity(req.equity.as_deref())?,
            title: req.title,
            salary: req.salary,
            company_handle: req.company_handle,
        })
    }
}

impl TryFrom<UpdateJobRequest> for JobPatch {
    type Error = Error;

    fn try_from(req: UpdateJobRequest) -> Result<Self> {
        Ok(JobPatch {
            equity: parse_optional_equity(req.equity.as_deref())?,
            title: req.title,
            salary: req.salary,
        })
    }
}

impl From<JobSearchParams> for JobFilter {
    fn from(params: JobSearchParams) -> Self {
        JobFilter {
            min_salary: params.min_salary,
            has_equity: params.has_equity.as_deref() == Some("true"),
            title: params.title,
        }
    }
}

/// Create a job (admin only)
pub async fn create_job(
    AdminUser(ctx): AdminUser,
    State(state): State<JobsState>,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobResponse<Job>>)> {
    let new_job = NewJob::try_from(req)?;
    let job = state.repos.jobs.create(&new_job).await?;

    tracing::info!(job_id = job.id, company = %job.company_handle, admin = %ctx.username, "Job created");

    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// List jobs, optionally filtered by `minSalary`, `hasEquity` and `title`
pub async fn list_jobs(
    State(state): State<JobsState>,
    ValidatedQuery(params): ValidatedQuery<JobSearchParams>,
) -> Result<Json<JobListResponse>> {
    let filter = JobFilter::from(params);
    let jobs = state.repos.jobs.find_all(&filter).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// Get a single job with its company
pub async fn get_job(
    State(state): State<JobsState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<JobResponse<JobDetail>>> {
    let job = state.repos.jobs.get(id).await?;
    Ok(Json(JobResponse { job }))
}

/// Partially update a job (admin only)
pub async fn update_job(
    AdminUser(ctx): AdminUser,
    State(state): State<JobsState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(req): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<JobResponse<Job>>> {
    let patch = JobPatch::try_from(req)?;
    let job = state.repos.jobs.update(id, patch).await?;

    tracing::info!(job_id = id, admin = %ctx.username, "Job updated");

    Ok(Json(JobResponse { job }))
}

/// Delete a job (admin only)
pub async fn delete_job(
    AdminUser(ctx): AdminUser,
    State(state): State<JobsState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<DeleteJobResponse>> {
    state.repos.jobs.remove(id).await?;

    tracing::info!(job_id = id, admin = %ctx.username, "Job deleted");

    Ok(Json(DeleteJobResponse { deleted: id }))
}
