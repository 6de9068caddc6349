use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

use corona_tracker::models::location::{Coordinates, Location, MetricSeries, Timelines};
use corona_tracker::models::report::{Latest, Report};
use corona_tracker::models::timeline::Timeline;
use corona_tracker::render::errors::RenderError;
use corona_tracker::render::{ChartConfig, ChartRenderer, RecoveredLabel, chart_title};

fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 3, day, 0, 0, 0).unwrap()
}

fn series(counts: [(u32, u64); 3]) -> MetricSeries {
    let timeline: Timeline = counts
        .into_iter()
        .map(|(day, count)| (ts(day), count))
        .collect();
    MetricSeries {
        latest: counts.iter().map(|(_, count)| *count).max().unwrap(),
        timeline,
    }
}

fn germany_report() -> Report {
    let location = Location {
        coordinates: Coordinates {
            latitude: "51".to_string(),
            longitude: "9".to_string(),
        },
        country: "Germany".to_string(),
        country_code: "DE".to_string(),
        id: 120,
        last_updated: Utc.with_ymd_and_hms(2020, 3, 21, 6, 59, 11).unwrap(),
        latest: Latest {
            confirmed: 19848,
            deaths: 67,
            recovered: 180,
        },
        province: String::new(),
        // Wire order is deliberately non-chronological.
        timelines: Timelines {
            confirmed: series([(20, 19848), (18, 12327), (19, 15320)]),
            deaths: series([(19, 44), (18, 28), (20, 67)]),
            recovered: series([(18, 105), (20, 180), (19, 113)]),
        },
    };

    Report {
        latest: location.latest,
        locations: vec![location],
    }
}

#[test]
fn renders_a_three_series_chart_to_a_non_empty_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let report = germany_report();

    ChartRenderer::default().render(&report, &path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0, "chart file should not be empty");
    assert!(chart_title(&report.locations[0]).contains("Corona in Germany from"));
}

#[test]
fn corrected_recovered_label_renders_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let renderer = ChartRenderer::new(ChartConfig {
        recovered_label: RecoveredLabel::Corrected,
        ..ChartConfig::default()
    });

    renderer.render(&germany_report(), &path).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn reports_without_locations_are_rejected() {
    let report = Report {
        latest: Latest::default(),
        locations: vec![],
    };

    let err = ChartRenderer::default()
        .render(&report, Path::new("unused.png"))
        .unwrap_err();

    assert!(matches!(err, RenderError::EmptyLocations));
}

#[test]
fn locations_without_any_points_are_rejected() {
    let mut report = germany_report();
    report.locations[0].timelines = Timelines::default();

    let err = ChartRenderer::default()
        .render(&report, Path::new("unused.png"))
        .unwrap_err();

    assert!(matches!(err, RenderError::NoDataPoints));
}

#[test]
fn source_timelines_are_untouched_by_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let report = germany_report();
    let before = report.clone();

    ChartRenderer::default().render(&report, &path).unwrap();

    assert_eq!(report, before);
}
