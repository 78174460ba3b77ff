//! Job domain entities for Jobly
//!
//! Jobs belong to a company (referenced by handle). Equity is carried as a
//! `Decimal` end to end and serialized as a string, so values such as `0.1`
//! never pass through floating point.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use jobly_common::{Error, Result};

/// Job entity as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Data for a job that has not been inserted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Fields an existing job may change.
///
/// There is no `id` or `company_handle` here: a job never moves between
/// companies once created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}

/// A single bindable column value from a `JobPatch`
#[derive(Debug, Clone, PartialEq)]
pub enum JobColumnValue {
    Text(String),
    Integer(i32),
    Decimal(Decimal),
}

impl JobPatch {
    /// Present fields as `(column, value)` pairs, in declaration order
    pub fn into_columns(self) -> Vec<(&'static str, JobColumnValue)> {
        let mut columns = Vec::with_capacity(3);
        if let Some(title) = self.title {
            columns.push(("title", JobColumnValue::Text(title)));
        }
        if let Some(salary) = self.salary {
            columns.push(("salary", JobColumnValue::Integer(salary)));
        }
        if let Some(equity) = self.equity {
            columns.push(("equity", JobColumnValue::Decimal(equity)));
        }
        columns
    }
}

/// Search filter for listing jobs. All present predicates are AND-combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub min_salary: Option<i32>,
    /// `true` restricts to jobs with non-zero equity; `false` imposes nothing
    pub has_equity: bool,
    /// Case-insensitive substring of the title
    pub title: Option<String>,
}

/// Job row in a listing, flattened with its company's name
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
    pub company_name: String,
}

/// Company read model joined onto a job (companies are owned elsewhere)
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// Job with its full company detail
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    #[sqlx(flatten)]
    pub company: CompanySummary,
}

/// Parse an equity string, which must be a decimal in `[0, 1]`
pub fn parse_equity(raw: &str) -> Result<Decimal> {
    let equity = Decimal::from_str(raw.trim())
        .map_err(|_| Error::Validation(format!("equity must be a decimal string, got {raw:?}")))?;

    if equity < Decimal::ZERO || equity > Decimal::ONE {
        return Err(Error::Validation(format!(
            "equity must be between 0 and 1, got {raw}"
        )));
    }

    Ok(equity)
}
