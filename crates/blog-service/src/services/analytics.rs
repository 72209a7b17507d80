//! Analytics service - daily comment breakdown
//!
//! Reads both the comment and blocked-comment stores over a date range and
//! shapes them into a per-day report. Nothing is persisted; every query
//! recomputes from the tables.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::instrument;

use crate::dto::{BlockedCommentResponse, CommentResponse, DailyBreakdownResponse, DailyBucket};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the daily breakdown report for `[date_from, date_to]`.
    ///
    /// Selection compares creation timestamps against the midnight instants
    /// of both dates, inclusive on both ends. The upper bound is midnight of
    /// `date_to`, not end of day: a `date_from == date_to` query only
    /// catches records at or before that midnight instant.
    #[instrument(skip(self))]
    pub async fn daily_breakdown(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> ServiceResult<DailyBreakdownResponse> {
        let from = midnight_utc(date_from);
        let to = midnight_utc(date_to);

        let comments = self
            .ctx
            .comment_repo()
            .find_created_between(from, to)
            .await?;
        let blocked = self
            .ctx
            .blocked_comment_repo()
            .find_created_between(from, to)
            .await?;

        let (comments, total_comments_amount) =
            bucket_by_day(&comments, |c| c.created_at, |c| CommentResponse::from(c));
        let (blocked_comments, total_blocked_comments_amount) =
            bucket_by_day(&blocked, |b| b.created_at, |b| BlockedCommentResponse::from(b));

        Ok(DailyBreakdownResponse {
            comments,
            blocked_comments,
            total_comments_amount,
            total_blocked_comments_amount,
        })
    }
}

/// The midnight instant of a calendar date, in UTC
fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Partition records by the calendar date of their creation timestamp.
///
/// Per-day counts equal the item list lengths; the grand total is
/// accumulated while grouping, so it always equals the sum of per-day
/// counts.
fn bucket_by_day<T, R>(
    records: &[T],
    created_at: impl Fn(&T) -> DateTime<Utc>,
    to_response: impl Fn(&T) -> R,
) -> (BTreeMap<NaiveDate, DailyBucket<R>>, u64) {
    let mut buckets: BTreeMap<NaiveDate, DailyBucket<R>> = BTreeMap::new();
    let mut total = 0u64;

    for record in records {
        let day = created_at(record).date_naive();
        let bucket = buckets.entry(day).or_insert_with(|| DailyBucket {
            items: Vec::new(),
            comments_amount: 0,
        });
        bucket.items.push(to_response(record));
        bucket.comments_amount += 1;
        total += 1;
    }

    (buckets, total)
}
