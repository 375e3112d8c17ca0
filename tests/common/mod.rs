#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use book_ad_analytics::domain::entities::{
    Campaign, CatalogEntry, DailyAdSnapshot, PageReadStatement, RoyaltyStatement,
};
use book_ad_analytics::domain::metrics::PageReadRate;
use book_ad_analytics::domain::repositories::RecordStore;
use book_ad_analytics::infrastructure::persistence::InMemoryRecordStore;
use book_ad_analytics::api::handlers::health_handler;
use book_ad_analytics::api::routes::analytics_routes;
use book_ad_analytics::state::AppState;
use chrono::NaiveDate;

pub const FANOUT_LIMIT: usize = 4;

/// A day in August 2018.
pub fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 8, day).unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Fixture catalog.
///
/// - "Test Book": standalone, advertised daily from the 12th to the 15th,
///   one unit sold on each of the 11th, 13th and 15th.
/// - "Saga" series of three books; only book one is advertised. Book three
///   earns part of its units through page reads.
/// - "Unadvertised": standalone with sales and no campaign.
pub fn fixture() -> InMemoryRecordStore {
    InMemoryRecordStore::builder()
        .book(CatalogEntry::new("Test Book", "A. Author").with_full_read_page_count(300.0))
        .book(
            CatalogEntry::new("Saga One", "A. Author")
                .in_series("Saga", 1)
                .with_full_read_page_count(200.0),
        )
        .book(
            CatalogEntry::new("Saga Two", "A. Author")
                .in_series("Saga", 2)
                .with_full_read_page_count(200.0),
        )
        .book(
            CatalogEntry::new("Saga Three", "A. Author")
                .in_series("Saga", 3)
                .with_full_read_page_count(200.0),
        )
        .book(CatalogEntry::new("Unadvertised", "B. Author"))
        .campaign(Campaign::new("Test Book SP", "SP", d(1)).linked_to("Test Book"))
        .campaign(Campaign::new("Saga One AMS", "SP", d(1)).linked_to("Saga One"))
        .campaign(Campaign::new("Orphan", "SP", d(1)))
        .snapshots([
            snapshot("Test Book SP", 12, 6000.0, 60.0),
            snapshot("Test Book SP", 13, 5700.0, 57.0),
            snapshot("Test Book SP", 14, 5000.0, 50.0),
            snapshot("Test Book SP", 15, 5600.0, 56.0),
            DailyAdSnapshot::new("Saga One AMS", d(5))
                .with_impressions(1000.0)
                .with_clicks(10.0)
                .with_average_cpc(0.5),
            DailyAdSnapshot::new("Orphan", d(5)).with_clicks(999.0),
        ])
        .royalty(RoyaltyStatement::new("Test Book", d(11), Some(1.0), Some(3.0)))
        .royalty(RoyaltyStatement::new("Test Book", d(13), Some(1.0), Some(3.0)))
        .royalty(RoyaltyStatement::new("Test Book", d(15), Some(1.0), Some(3.0)))
        .royalty(RoyaltyStatement::new("Saga One: A Novel", d(5), Some(10.0), Some(20.0)))
        .royalty(RoyaltyStatement::new("Saga Two", d(6), Some(4.0), Some(8.0)))
        .royalty(RoyaltyStatement::new("Saga Three", d(7), Some(2.0), Some(4.0)))
        .royalty(RoyaltyStatement::new("Unadvertised", d(7), Some(5.0), None))
        .page_read(PageReadStatement::new("Test Book", d(10), Some(10.0)))
        .page_read(PageReadStatement::new("Test Book", d(12), Some(20.0)))
        .page_read(PageReadStatement::new("Test Book", d(14), Some(30.0)))
        .page_read(PageReadStatement::new("Saga Three", d(7), Some(400.0)))
        .build()
}

/// Cost per click for every "Test Book" snapshot.
pub const TEST_BOOK_CPC: f64 = 0.25;

fn snapshot(campaign: &str, day: u32, impressions: f64, clicks: f64) -> DailyAdSnapshot {
    DailyAdSnapshot::new(campaign, d(day))
        .with_impressions(impressions)
        .with_clicks(clicks)
        .with_average_cpc(TEST_BOOK_CPC)
}

pub fn create_test_store() -> RecordStore {
    fixture().into_record_store()
}

pub fn create_test_state() -> AppState {
    AppState::new(create_test_store(), PageReadRate::STANDARD, FANOUT_LIMIT)
}

/// Same routes as the production router, without the outer middleware.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", analytics_routes())
        .with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}
