//! Date-range extractor for the daily breakdown query
//!
//! Both dates are required; a missing or malformed date rejects the request
//! before the aggregator runs, with an unprocessable (422) signal.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::DomainError;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query parameters for the breakdown endpoint
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
}

/// Validated date range, inclusive of both endpoints at the instant level
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

fn require_date(value: Option<String>, name: &str) -> Result<NaiveDate, ApiError> {
    let raw = value
        .ok_or_else(|| DomainError::InvalidDateRange(format!("{name} is required")))?;

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDateRange(format!("{name} must be YYYY-MM-DD")).into())
}

#[async_trait]
impl<S> FromRequestParts<S> for DateRange
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<DateRangeParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let date_from = require_date(params.date_from, "date_from")?;
        let date_to = require_date(params.date_to, "date_to")?;

        Ok(DateRange { date_from, date_to })
    }
}
