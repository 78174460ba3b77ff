//! Job repository

use crate::domain::entities::{
    Job, JobColumnValue, JobDetail, JobFilter, JobListing, JobPatch, NewJob,
};
use jobly_common::{build_set_clause, Error, RepositoryError, Result};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres, QueryBuilder};

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new job.
    ///
    /// An unknown `company_handle` trips the foreign key and is reported as
    /// `Error::Validation`.
    pub async fn create(&self, job: &NewJob) -> Result<Job> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            VALUES ($1, $2, $3, $4)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(&job.title)
        .bind(job.salary)
        .bind(job.equity)
        .bind(&job.company_handle)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;
        Ok(row)
    }

    /// List jobs matching every predicate in `filter`, ordered by title
    pub async fn find_all(&self, filter: &JobFilter) -> Result<Vec<JobListing>> {
        let rows = listing_query(filter)
            .build_query_as::<JobListing>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find a job with its company detail
    pub async fn get(&self, id: i32) -> Result<JobDetail> {
        let row = sqlx::query_as::<_, JobDetail>(
            r#"
            SELECT j.id, j.title, j.salary, j.equity,
                   c.handle, c.name, c.description, c.num_employees, c.logo_url
            FROM jobs j
            INNER JOIN companies c ON c.handle = j.company_handle
            WHERE j.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| no_such_job(id))
    }

    /// Apply a partial update; only fields present in `patch` change
    pub async fn update(&self, id: i32, patch: JobPatch) -> Result<Job> {
        let update = build_set_clause(patch.into_columns(), &[])?;
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {JOB_COLUMNS}",
            update.set_cols,
            update.next_placeholder()
        );

        let mut query = sqlx::query_as::<_, Job>(&sql);
        for value in update.values {
            query = bind_column(query, value);
        }

        let row = query
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        row.ok_or_else(|| no_such_job(id))
    }

    /// Delete a job by ID
    pub async fn remove(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(no_such_job(id));
        }
        Ok(())
    }
}

fn no_such_job(id: i32) -> Error {
    Error::NotFound(format!("No job: {id}"))
}

/// Build the `find_all` statement; each present filter adds one bound predicate
fn listing_query(filter: &JobFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new(
        r#"
        SELECT j.id, j.title, j.salary, j.equity, j.company_handle,
               c.name AS company_name
        FROM jobs j
        INNER JOIN companies c ON c.handle = j.company_handle
        "#,
    );
    let mut first = true;

    if let Some(min_salary) = filter.min_salary {
        push_predicate(&mut query, &mut first)
            .push("j.salary >= ")
            .push_bind(min_salary);
    }

    if filter.has_equity {
        push_predicate(&mut query, &mut first).push("j.equity > 0");
    }

    if let Some(title) = &filter.title {
        push_predicate(&mut query, &mut first)
            .push("j.title ILIKE ")
            .push_bind(format!("%{}%", escape_like(title)));
    }

    query.push(" ORDER BY j.title ASC, j.id ASC");
    query
}

fn push_predicate<'q, 'b>(
    query: &'b mut QueryBuilder<'q, Postgres>,
    first: &mut bool,
) -> &'b mut QueryBuilder<'q, Postgres> {
    query.push(if std::mem::take(first) { " WHERE " } else { " AND " })
}

fn bind_column<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    value: JobColumnValue,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    match value {
        JobColumnValue::Text(v) => query.bind(v),
        JobColumnValue::Integer(v) => query.bind(v),
        JobColumnValue::Decimal(v) => query.bind(v),
    }
}

/// Escape `ILIKE` metacharacters so the title matches as a literal substring
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
