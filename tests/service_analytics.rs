mod common;

use book_ad_analytics::application::services::{
    AdService, ClicksPerSale, EarningsService, JoinResolver, SeriesService,
};
use book_ad_analytics::domain::entities::{
    Campaign, CatalogEntry, DailyAdSnapshot, PageReadStatement, RoyaltyStatement,
};
use book_ad_analytics::domain::metrics::{
    ClickThrough, Conversion, LookbackWindow, MetricKind, PageReadRate, Roi,
};
use book_ad_analytics::error::AppError;
use book_ad_analytics::infrastructure::persistence::InMemoryRecordStore;
use common::{FANOUT_LIMIT, assert_close, d};

fn resolver() -> JoinResolver {
    JoinResolver::new(common::create_test_store(), FANOUT_LIMIT)
}

fn ad_service() -> AdService {
    AdService::new(resolver(), PageReadRate::STANDARD)
}

fn earnings_service() -> EarningsService {
    EarningsService::new(resolver(), PageReadRate::STANDARD)
}

fn series_service() -> SeriesService {
    SeriesService::new(resolver(), PageReadRate::STANDARD)
}

#[tokio::test]
async fn test_book_metrics_joins_all_sources() {
    let metrics = ad_service().book_metrics("Test Book", None).await.unwrap();
    let t = metrics.totals;

    assert_eq!(t.impressions, 22300.0);
    assert_eq!(t.clicks, 223.0);
    assert_eq!(t.units_sold, 3.0);
    assert_eq!(t.pages_read, 60.0);
    assert_close(t.units_sold_via_page_reads, 0.2);
    assert_close(t.ad_spend, 55.75);
    assert_eq!(t.royalties, 9.0);
    assert_close(t.earnings, 9.0 + 60.0 * 0.0046);

    assert_eq!(
        metrics.ratios.click_through,
        ClickThrough::ImpressionsPerClick(100.0)
    );
    match metrics.ratios.conversion {
        Conversion::ClicksPerSale(v) => assert_close(v, 223.0 / 3.2),
        other => panic!("unexpected conversion {other:?}"),
    }
    match metrics.ratios.roi {
        Roi::Percent(v) => assert_close(v, (9.276 - 55.75) * 100.0 / 55.75),
        other => panic!("unexpected roi {other:?}"),
    }
    assert_eq!(metrics.read_through, 0.0);
}

#[tokio::test]
async fn test_zero_campaigns_yield_zeros_and_sentinels() {
    let metrics = ad_service().book_metrics("Unadvertised", None).await.unwrap();

    assert_eq!(metrics.totals.impressions, 0.0);
    assert_eq!(metrics.totals.clicks, 0.0);
    assert_eq!(metrics.totals.ad_spend, 0.0);
    assert_eq!(metrics.totals.units_sold, 5.0);
    assert_eq!(metrics.ratios.click_through, ClickThrough::NoClicks);
    assert_eq!(metrics.ratios.conversion, Conversion::NoClicks);
    assert_eq!(metrics.ratios.roi, Roi::NoAdSpend);
}

#[tokio::test]
async fn test_unknown_book_is_not_found() {
    let err = ad_service().book_metrics("Missing", None).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    let err = ad_service().clicks_per_sale("Missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_book_metrics_is_idempotent() {
    let service = ad_service();

    let first = service.book_metrics("Saga One", Some(d(1))).await.unwrap();
    let second = service.book_metrics("Saga One", Some(d(1))).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_since_is_exclusive() {
    let metrics = ad_service()
        .book_metrics("Test Book", Some(d(13)))
        .await
        .unwrap();

    assert_eq!(metrics.totals.clicks, 106.0);
    assert_eq!(metrics.totals.units_sold, 1.0);
    assert_eq!(metrics.totals.pages_read, 30.0);
}

#[tokio::test]
async fn test_read_through_follows_series_order() {
    let service = ad_service();

    let one = service.book_metrics("Saga One", None).await.unwrap();
    let two = service.book_metrics("Saga Two", None).await.unwrap();
    let three = service.book_metrics("Saga Three", None).await.unwrap();

    assert_close(one.read_through, 0.4);
    assert_close(two.read_through, 1.0);
    assert_eq!(three.read_through, 0.0);
}

#[tokio::test]
async fn test_statement_subtitles_join_on_main_title() {
    let metrics = ad_service().book_metrics("Saga One", None).await.unwrap();
    assert_eq!(metrics.totals.units_sold, 10.0);
    assert_eq!(metrics.totals.royalties, 20.0);
}

#[tokio::test]
async fn test_series_rollup_is_sum_of_books() {
    let ads = ad_service();
    let rollup = series_service().series_metrics("Saga", None).await.unwrap();

    let mut impressions = 0.0;
    let mut units = 0.0;
    let mut earnings = 0.0;
    for title in ["Saga One", "Saga Two", "Saga Three"] {
        let book = ads.book_metrics(title, None).await.unwrap();
        impressions += book.totals.impressions;
        units += book.totals.units_sold;
        earnings += book.totals.earnings;
    }

    assert_eq!(rollup.books.len(), 3);
    assert_eq!(rollup.totals.impressions, impressions);
    assert_eq!(rollup.totals.units_sold, units);
    assert_close(rollup.totals.earnings, earnings);
    match rollup.ratios.roi {
        Roi::Percent(v) => assert_close(v, (33.84 - 5.0) * 100.0 / 5.0),
        other => panic!("unexpected roi {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_series_rolls_up_to_zero() {
    let rollup = series_service()
        .series_metrics("Nonexistent", None)
        .await
        .unwrap();

    assert!(rollup.books.is_empty());
    assert_eq!(rollup.totals.impressions, 0.0);
    assert_eq!(rollup.ratios.roi, Roi::NoAdSpend);
}

#[tokio::test]
async fn test_conversions_rank_by_roi() {
    let books = ad_service()
        .conversions(LookbackWindow::Lifetime, d(31))
        .await
        .unwrap();

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Saga One", "Test Book"]);
}

#[tokio::test]
async fn test_conversions_window_cutoff() {
    let books = ad_service()
        .conversions(LookbackWindow::Days(17), d(31))
        .await
        .unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Test Book");
    assert_eq!(books[0].totals.clicks, 56.0);
}

#[tokio::test]
async fn test_series_conversions() {
    let series = series_service()
        .series_conversions(LookbackWindow::Lifetime, d(31))
        .await
        .unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].series_name, "Saga");
    assert_eq!(series[0].books[0].title, "Saga One");
}

#[tokio::test]
async fn test_clicks_per_sale_scenario() {
    let result = ad_service().clicks_per_sale("Test Book").await.unwrap();

    assert_eq!(
        result,
        vec![
            ClicksPerSale { value: 117.0, date: d(13) },
            ClicksPerSale { value: 106.0, date: d(15) },
        ]
    );
}

#[tokio::test]
async fn test_clicks_per_sale_includes_first_statement_day() {
    let store = InMemoryRecordStore::builder()
        .book(CatalogEntry::new("Launch Day", "A"))
        .campaign(Campaign::new("Launch Day SP", "SP", d(1)).linked_to("Launch Day"))
        .snapshots([
            DailyAdSnapshot::new("Launch Day SP", d(11)).with_clicks(99.0),
            DailyAdSnapshot::new("Launch Day SP", d(12)).with_clicks(1.0),
            DailyAdSnapshot::new("Launch Day SP", d(13)).with_clicks(17.0),
        ])
        .royalty(RoyaltyStatement::new("Launch Day", d(11), Some(1.0), None))
        .royalty(RoyaltyStatement::new("Launch Day", d(13), Some(1.0), None))
        .build()
        .into_record_store();
    let service = AdService::new(JoinResolver::new(store, FANOUT_LIMIT), PageReadRate::STANDARD);

    let result = service.clicks_per_sale("Launch Day").await.unwrap();

    assert_eq!(result, vec![ClicksPerSale { value: 117.0, date: d(13) }]);
}

#[tokio::test]
async fn test_unlinked_campaigns_excluded_from_book_totals() {
    let service = ad_service();

    let unlinked = service.unlinked_campaigns().await.unwrap();
    assert_eq!(unlinked.len(), 1);
    assert_eq!(unlinked[0].name, "Orphan");

    let books = service.conversions(LookbackWindow::Lifetime, d(31)).await.unwrap();
    assert!(books.iter().all(|b| b.totals.clicks < 999.0));
}

#[tokio::test]
async fn test_ad_history_sorted_by_date() {
    let history = ad_service().ad_history("Test Book").await.unwrap();

    let days: Vec<_> = history.iter().map(|s| s.date).collect();
    assert_eq!(days, vec![d(12), d(13), d(14), d(15)]);
}

#[tokio::test]
async fn test_range_metric_bounds_inclusive() {
    let service = earnings_service();

    let clicks = service
        .range_metric("Test Book", MetricKind::Clicks, d(12), d(13))
        .await
        .unwrap();
    assert_eq!(clicks.total, 117.0);
    assert_eq!(clicks.date, d(13));

    let spend = service
        .range_metric("Test Book", MetricKind::AdSpend, d(14), d(15))
        .await
        .unwrap();
    assert_close(spend.total, 106.0 * 0.25);
}

#[tokio::test]
async fn test_inverted_range_is_validation_error() {
    let err = earnings_service()
        .range_metric("Test Book", MetricKind::Clicks, d(15), d(12))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn test_series_range_metric_sums_books() {
    let total = earnings_service()
        .series_range_metric("Saga", MetricKind::UnitsSold, d(1), d(31))
        .await
        .unwrap();

    assert_eq!(total.total, 16.0);
}

#[tokio::test]
async fn test_daily_series_zero_fills() {
    let values = earnings_service()
        .daily_series("Test Book", MetricKind::PagesRead, d(9), d(14))
        .await
        .unwrap();

    let pages: Vec<f64> = values.iter().map(|v| v.value).collect();
    assert_eq!(pages, vec![0.0, 10.0, 0.0, 20.0, 0.0, 30.0]);
    assert_eq!(values.first().unwrap().date, d(9));
    assert_eq!(values.last().unwrap().date, d(14));
}

#[tokio::test]
async fn test_moving_average_zero_padding_law() {
    let average = earnings_service()
        .moving_average("Test Book", MetricKind::PagesRead, d(14), 7)
        .await
        .unwrap();

    assert_eq!(average.raw.len(), 3);
    assert_close(average.average, 60.0 / 7.0);
}

#[tokio::test]
async fn test_moving_average_page_read_revenue_is_derived() {
    let average = earnings_service()
        .moving_average("Test Book", MetricKind::PageReadRevenue, d(14), 7)
        .await
        .unwrap();

    assert!(average.raw.is_empty());
    assert_close(average.average, 60.0 / 7.0 * 0.0046);
}

#[tokio::test]
async fn test_moving_average_zero_window_rejected() {
    let err = earnings_service()
        .moving_average("Test Book", MetricKind::PagesRead, d(14), 0)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn test_roi_without_spend_is_sentinel() {
    let report = earnings_service()
        .roi("Test Book", d(1), d(11))
        .await
        .unwrap();

    assert_eq!(report.date, d(11));
    assert_eq!(report.roi, Roi::NoAdSpend);
}

#[tokio::test]
async fn test_missing_numeric_fields_count_as_zero() {
    let store = InMemoryRecordStore::builder()
        .book(CatalogEntry::new("Sparse", "A"))
        .royalty(RoyaltyStatement::new("Sparse", d(3), None, None))
        .page_read(PageReadStatement::new("Sparse", d(3), None))
        .build()
        .into_record_store();
    let service = AdService::new(JoinResolver::new(store, 1), PageReadRate::STANDARD);

    let metrics = service.book_metrics("Sparse", None).await.unwrap();

    assert_eq!(metrics.totals.units_sold, 0.0);
    assert_eq!(metrics.totals.royalties, 0.0);
    assert_eq!(metrics.totals.pages_read, 0.0);
    assert_eq!(metrics.totals.earnings, 0.0);
}
