//! Analytics handlers
//!
//! The daily breakdown endpoint; computed on demand from both comment
//! stores.

use axum::{extract::State, Json};
use blog_service::{AnalyticsService, DailyBreakdownResponse};

use crate::extractors::DateRange;
use crate::response::ApiResult;
use crate::state::AppState;

/// Daily comment/blocked-comment breakdown over a date range
///
/// GET /comments-daily-breakdown?date_from=YYYY-MM-DD&date_to=YYYY-MM-DD
pub async fn daily_breakdown(
    State(state): State<AppState>,
    range: DateRange,
) -> ApiResult<Json<DailyBreakdownResponse>> {
    let service = AnalyticsService::new(state.service_context());
    let report = service
        .daily_breakdown(range.date_from, range.date_to)
        .await?;
    Ok(Json(report))
}
