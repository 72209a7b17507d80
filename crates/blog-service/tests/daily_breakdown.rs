//! Daily breakdown aggregation
//!
//! Run with: cargo test -p blog-service --test daily_breakdown

mod common;

use blog_core::entities::{BlockedComment, Comment};
use blog_core::{ModerationVerdict, Snowflake};
use blog_service::AnalyticsService;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use common::{harness, TestHarness};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn seed_comment(h: &TestHarness, created_at: DateTime<Utc>) {
    let comment = Comment::new(
        h.ctx.generate_id(),
        Snowflake::new(1),
        Snowflake::new(2),
        "a comment".to_string(),
    );
    h.comments.insert_at(comment, created_at);
}

fn seed_blocked(h: &TestHarness, created_at: DateTime<Utc>) {
    let blocked = BlockedComment::from_verdict(
        h.ctx.generate_id(),
        Snowflake::new(1),
        Snowflake::new(2),
        "a hostile comment".to_string(),
        &ModerationVerdict::flagged_for(["harassment"]),
    );
    h.blocked.insert_at(blocked, created_at);
}

#[tokio::test]
async fn groups_records_by_calendar_day_with_totals() {
    let h = harness();
    seed_comment(&h, at(2024, 5, 17, 9, 0, 0));
    seed_comment(&h, at(2024, 5, 17, 15, 30, 0));
    seed_comment(&h, at(2024, 5, 18, 1, 0, 0));
    seed_blocked(&h, at(2024, 5, 18, 2, 0, 0));

    let report = AnalyticsService::new(&h.ctx)
        .daily_breakdown(date(2024, 5, 17), date(2024, 5, 19))
        .await
        .unwrap();

    assert_eq!(report.total_comments_amount, 3);
    assert_eq!(report.total_blocked_comments_amount, 1);

    let day_one = &report.comments[&date(2024, 5, 17)];
    assert_eq!(day_one.comments_amount, 2);
    assert_eq!(day_one.items.len(), 2);

    let day_two = &report.comments[&date(2024, 5, 18)];
    assert_eq!(day_two.comments_amount, 1);

    // Blocked records are bucketed independently of comments
    assert!(!report.blocked_comments.contains_key(&date(2024, 5, 17)));
    let blocked_day = &report.blocked_comments[&date(2024, 5, 18)];
    assert_eq!(blocked_day.comments_amount, 1);
    assert!(!blocked_day.items[0].blocking_reasoning.is_empty());
}

#[tokio::test]
async fn upper_bound_is_midnight_of_date_to_inclusive() {
    let h = harness();
    // Exactly at midnight of date_to: included
    seed_comment(&h, at(2024, 5, 18, 0, 0, 0));
    // One second later: excluded
    seed_comment(&h, at(2024, 5, 18, 0, 0, 1));

    let report = AnalyticsService::new(&h.ctx)
        .daily_breakdown(date(2024, 5, 17), date(2024, 5, 18))
        .await
        .unwrap();

    assert_eq!(report.total_comments_amount, 1);
    assert_eq!(report.comments[&date(2024, 5, 18)].comments_amount, 1);
}

#[tokio::test]
async fn same_day_range_catches_only_the_midnight_instant() {
    let h = harness();
    // Created during the day, after midnight of date_to: excluded
    seed_comment(&h, at(2024, 5, 17, 10, 0, 0));
    // Created exactly at midnight: included
    seed_comment(&h, at(2024, 5, 17, 0, 0, 0));

    let report = AnalyticsService::new(&h.ctx)
        .daily_breakdown(date(2024, 5, 17), date(2024, 5, 17))
        .await
        .unwrap();

    assert_eq!(report.total_comments_amount, 1);
}

#[tokio::test]
async fn four_comments_on_one_day_produce_one_bucket_of_four() {
    let h = harness();
    let today = date(2024, 5, 17);
    for _ in 0..4 {
        seed_comment(&h, at(2024, 5, 17, 0, 0, 0));
    }

    let report = AnalyticsService::new(&h.ctx)
        .daily_breakdown(today, today)
        .await
        .unwrap();

    assert_eq!(report.total_comments_amount, 4);
    assert_eq!(report.comments.len(), 1);
    assert_eq!(report.comments[&today].comments_amount, 4);
    assert_eq!(report.comments[&today].items.len(), 4);
}

#[tokio::test]
async fn empty_range_yields_present_empty_buckets() {
    let h = harness();
    seed_comment(&h, at(2024, 5, 17, 9, 0, 0));

    // A future range with nothing in it
    let report = AnalyticsService::new(&h.ctx)
        .daily_breakdown(date(2030, 1, 1), date(2030, 1, 31))
        .await
        .unwrap();

    assert_eq!(report.total_comments_amount, 0);
    assert_eq!(report.total_blocked_comments_amount, 0);
    assert!(report.comments.is_empty());
    assert!(report.blocked_comments.is_empty());

    // The fields are present in the serialized report, not absent
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["comments"], serde_json::json!({}));
    assert_eq!(json["blocked_comments"], serde_json::json!({}));
}

#[tokio::test]
async fn repeated_queries_over_unchanged_store_are_identical() {
    let h = harness();
    seed_comment(&h, at(2024, 5, 17, 3, 0, 0));
    seed_comment(&h, at(2024, 5, 18, 4, 0, 0));
    seed_blocked(&h, at(2024, 5, 18, 5, 0, 0));

    let service = AnalyticsService::new(&h.ctx);
    let first = service
        .daily_breakdown(date(2024, 5, 17), date(2024, 5, 19))
        .await
        .unwrap();
    let second = service
        .daily_breakdown(date(2024, 5, 17), date(2024, 5, 19))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[tokio::test]
async fn lower_bound_includes_midnight_of_date_from() {
    let h = harness();
    // A second before the range starts: excluded
    seed_comment(&h, at(2024, 5, 16, 23, 59, 59));
    // Exactly at the start: included
    seed_comment(&h, at(2024, 5, 17, 0, 0, 0));

    let report = AnalyticsService::new(&h.ctx)
        .daily_breakdown(date(2024, 5, 17), date(2024, 5, 19))
        .await
        .unwrap();

    assert_eq!(report.total_comments_amount, 1);
}
