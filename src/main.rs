use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schulkalender::annotation::calendarannotationservice::CalendarAnnotationService;
use schulkalender::configuration::SchoolCalendarConfig;
use schulkalender::time::holidayrecord::parse_iso_date;

/// Lists school holidays and vacations of a German federal state
#[derive(Parser, Debug)]
#[command(name = "schulkalender")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON configuration with `bundesland` and `schoolVacations`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Year to list (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Annotate a single YYYY-MM-DD date instead of listing a year
    #[arg(short, long)]
    date: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schulkalender=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SchoolCalendarConfig::from_reader(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SchoolCalendarConfig::default(),
    };
    let service = CalendarAnnotationService::new(config);
    tracing::info!(region = %service.region(), "Calendar loaded");

    if let Some(date) = &cli.date {
        let d = parse_iso_date(date)?;
        let annotation = service.annotate(d);
        println!("{}\t{}\t{}", d, annotation.class(), annotation.label().unwrap_or(""));
        return Ok(());
    }

    let year = cli.year.unwrap_or_else(|| Local::now().year());
    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        anyhow::bail!("year {} is out of range", year);
    };

    println!("{} ({}) {}", service.region().name(), service.region(), year);
    for annotation in service.annotate_range(first, last) {
        if annotation.class().is_none() {
            continue;
        }
        println!(
            "{}\t{}\t{}",
            annotation.date(),
            annotation.class(),
            annotation.label().unwrap_or("")
        );
    }
    Ok(())
}
