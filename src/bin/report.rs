//! Command-line reports over the analytics record store.
//!
//! Runs the same services as the HTTP API directly against PostgreSQL and
//! prints the results as colored tables.
//!
//! # Usage
//!
//! ```bash
//! # Books ranked by ROI over the last 30 days
//! cargo run --bin report -- conversions --window 30days
//!
//! # Series rollups over the whole history
//! cargo run --bin report -- series
//!
//! # Metrics for one book since a date
//! cargo run --bin report -- book "Dead Reckoning" --since 2018-08-01
//!
//! # ROI over a date range
//! cargo run --bin report -- roi "Dead Reckoning" --start 2018-08-01 --end 2018-08-31
//!
//! # 7-day moving average of pages read
//! cargo run --bin report -- moving-average "Dead Reckoning" --metric pages_read --anchor 2018-08-31
//!
//! # Campaigns not yet linked to a book
//! cargo run --bin report -- unlinked
//!
//! # Check database connection
//! cargo run --bin report -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `REPORT_FANOUT_LIMIT` (optional): concurrent per-book computations (1..=256)

use book_ad_analytics::config::{Config, mask_connection_string};
use book_ad_analytics::domain::entities::Campaign;
use book_ad_analytics::domain::metrics::{
    BookMetrics, LookbackWindow, MetricKind, MetricTotals, MovingAverage, PageReadRate,
    SeriesMetrics,
};
use book_ad_analytics::infrastructure::persistence::pg_record_store;
use book_ad_analytics::state::AppState;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// Ad spend, royalty and page-read reports.
#[derive(Parser)]
#[command(name = "report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level reports.
#[derive(Subcommand)]
enum Commands {
    /// Advertised books ranked by ROI
    Conversions {
        /// Lookback window: `all` or `<N>days`
        #[arg(short, long, default_value = "all")]
        window: LookbackWindow,
    },

    /// Advertised series ranked by ROI
    Series {
        /// Lookback window: `all` or `<N>days`
        #[arg(short, long, default_value = "all")]
        window: LookbackWindow,
    },

    /// Totals and ratios for one book
    Book {
        title: String,

        /// Only count records after this date (YYYY-MM-DD)
        #[arg(short, long)]
        since: Option<NaiveDate>,
    },

    /// ROI for one book over a date range
    Roi {
        title: String,

        #[arg(long)]
        start: NaiveDate,

        #[arg(long)]
        end: NaiveDate,
    },

    /// Trailing average of one metric for one book
    MovingAverage {
        title: String,

        /// Metric kind, e.g. `pages_read`, `units_sold`, `clicks`
        #[arg(short, long)]
        metric: MetricKind,

        /// Last day of the window (YYYY-MM-DD)
        #[arg(short, long)]
        anchor: NaiveDate,

        /// Window size in days
        #[arg(short, long, default_value_t = 7)]
        window: u32,
    },

    /// Campaigns not linked to any book
    Unlinked,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await,
        command => {
            let fanout_limit = Config::load_report_fanout_limit()?;
            let state = AppState::new(
                pg_record_store(Arc::new(pool)),
                PageReadRate::STANDARD,
                fanout_limit,
            );
            run_report(command, &state).await
        }
    }
}

/// Runs one report against the analytics services.
async fn run_report(command: Commands, state: &AppState) -> Result<()> {
    let today = Utc::now().date_naive();

    match command {
        Commands::Conversions { window } => {
            let books = state
                .ad_service
                .conversions(window, today)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to compute conversions: {}", e))?;
            print_conversions(window, &books);
        }
        Commands::Series { window } => {
            let series = state
                .series_service
                .series_conversions(window, today)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to compute series: {}", e))?;
            print_series(window, &series);
        }
        Commands::Book { title, since } => {
            let metrics = state
                .ad_service
                .book_metrics(&title, since)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", title, e))?;
            print_book(&metrics);
        }
        Commands::Roi { title, start, end } => {
            let report = state
                .earnings_service
                .roi(&title, start, end)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", title, e))?;
            println!("{}", format!("💰 ROI for {title}").bright_blue().bold());
            println!();
            println!("  Period: {} to {}", start.to_string().cyan(), end.to_string().cyan());
            println!("  ROI:    {}", report.roi.to_string().bright_white().bold());
            println!();
        }
        Commands::MovingAverage {
            title,
            metric,
            anchor,
            window,
        } => {
            let average = state
                .earnings_service
                .moving_average(&title, metric, anchor, window)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", title, e))?;
            print_moving_average(&title, metric, window, &average);
        }
        Commands::Unlinked => {
            let campaigns = state
                .ad_service
                .unlinked_campaigns()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list campaigns: {}", e))?;
            print_unlinked(&campaigns);
        }
        Commands::Db { .. } => anyhow::bail!("database commands are not reports"),
    }

    Ok(())
}

/// Prints the ranked book listing.
///
/// # Output Format
///
/// ```text
/// 📊 Conversions (30days)
///
///   Title                          Clicks   Units   Spend     Earnings  ROI
///   ──────────────────────────────────────────────────────────────────────────
///   Dead Reckoning                 117      106.0   58.50     212.00    262.4%
/// ```
fn print_conversions(window: LookbackWindow, books: &[BookMetrics]) {
    println!("{}", format!("📊 Conversions ({window})").bright_blue().bold());
    println!();

    if books.is_empty() {
        println!("{}", "  No advertised books in this window".yellow());
        println!();
        return;
    }

    print_header("Title");
    for book in books {
        print_row(&book.title, &book.totals, &book.ratios.roi.to_string());
    }
    println!();
    println!("  Total: {}", books.len().to_string().bright_white().bold());
    println!();
}

/// Prints the ranked series listing.
fn print_series(window: LookbackWindow, series: &[SeriesMetrics]) {
    println!("{}", format!("📚 Series ({window})").bright_blue().bold());
    println!();

    if series.is_empty() {
        println!("{}", "  No advertised series in this window".yellow());
        println!();
        return;
    }

    print_header("Series");
    for rollup in series {
        print_row(&rollup.series_name, &rollup.totals, &rollup.ratios.roi.to_string());
        for book in &rollup.books {
            println!(
                "    {} {:<28} read-through {:.2}",
                "•".bright_black(),
                book.title,
                book.read_through
            );
        }
    }
    println!();
}

fn print_moving_average(title: &str, metric: MetricKind, window: u32, average: &MovingAverage) {
    println!(
        "{}",
        format!("📈 {window}-day average of {metric} for {title}")
            .bright_blue()
            .bold()
    );
    println!();
    for sample in &average.raw {
        println!(
            "  {}  {:>12.2}",
            sample.date.to_string().bright_black(),
            sample.value
        );
    }
    if !average.raw.is_empty() {
        println!("  {}", "─".repeat(26).bright_black());
    }
    println!(
        "  {}  {}",
        average.date.to_string().cyan(),
        format!("{:>12.4}", average.average).bright_white().bold()
    );
    println!();
}

fn print_book(book: &BookMetrics) {
    println!("{}", format!("📖 {}", book.title).bright_blue().bold());
    if let (Some(series), Some(number)) = (&book.series, book.series_number) {
        println!("  {} #{}", series.cyan(), number);
    }
    println!();

    let t = &book.totals;
    println!("  Impressions:        {:.0}", t.impressions);
    println!("  Clicks:             {:.0}", t.clicks);
    println!("  Units sold:         {:.1}", t.units_sold);
    println!("  Pages read:         {:.0}", t.pages_read);
    println!("  Units via reads:    {:.2}", t.units_sold_via_page_reads);
    println!("  Ad spend:           {:.2}", t.ad_spend);
    println!("  Royalties:          {:.2}", t.royalties);
    println!("  Earnings:           {:.2}", t.earnings);
    println!();
    println!("  Click-through:      {}", book.ratios.click_through);
    println!("  Conversion:         {}", book.ratios.conversion);
    println!(
        "  ROI:                {}",
        book.ratios.roi.to_string().bright_white().bold()
    );
    println!("  Read-through:       {:.2}", book.read_through);
    println!();
}

fn print_unlinked(campaigns: &[Campaign]) {
    println!("{}", "🔗 Unlinked campaigns".bright_blue().bold());
    println!();

    if campaigns.is_empty() {
        println!("{}", "  Every campaign is linked to a book".green());
        println!();
        return;
    }

    for campaign in campaigns {
        println!(
            "  {:<40} {:<20} {}",
            campaign.name.cyan(),
            campaign.campaign_type,
            campaign.start_date.to_string().bright_black()
        );
    }
    println!();
    println!("  Total: {}", campaigns.len().to_string().bright_white().bold());
    println!();
}

fn print_header(first: &str) {
    println!(
        "  {:<30} {:<8} {:<7} {:<9} {:<9} {}",
        first.bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Units".bright_white().bold(),
        "Spend".bright_white().bold(),
        "Earnings".bright_white().bold(),
        "ROI".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());
}

fn print_row(name: &str, totals: &MetricTotals, roi: &str) {
    println!(
        "  {:<30} {:<8.0} {:<7.1} {:<9.2} {:<9.2} {}",
        name.cyan(),
        totals.clicks,
        totals.units_sold_total(),
        totals.ad_spend,
        totals.earnings,
        roi.green()
    );
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());
            println!("  {}", mask_connection_string(database_url).bright_black());

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database query failed")?;

            let books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog_entries")
                .fetch_one(pool)
                .await
                .context("Catalog table missing; run the server once to apply migrations")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Catalog entries: {}", books.to_string().bright_white());
        }
    }

    Ok(())
}
