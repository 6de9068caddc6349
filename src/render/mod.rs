//! Renders a fetched report as a time-series line chart.
//!
//! The renderer reads the first location of a [`Report`], sorts each of its
//! three timelines into chronological points, and draws one labeled line per
//! metric to a raster image. Every failure is returned as a
//! [`RenderError`]; drawing never terminates the process.

pub mod errors;

use std::ops::Range;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use tracing::info;

use crate::models::location::Location;
use crate::models::report::Report;
use crate::models::timeline::TimelinePoint;
use crate::render::errors::RenderError;

/// How the recovered series is labeled in the legend.
///
/// The upstream dashboard shipped the misspelled label for years, so
/// existing consumers may match on it verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecoveredLabel {
    /// `"Recoverd"`, as displayed by existing consumers.
    #[default]
    Legacy,
    /// `"Recovered"`.
    Corrected,
}

impl RecoveredLabel {
    fn as_str(self) -> &'static str {
        match self {
            RecoveredLabel::Legacy => "Recoverd",
            RecoveredLabel::Corrected => "Recovered",
        }
    }
}

/// Chart appearance settings.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Output image size in pixels. The default is a 4x3 inch canvas at
    /// 96 dpi.
    pub size: (u32, u32),
    pub recovered_label: RecoveredLabel,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: (384, 288),
            recovered_label: RecoveredLabel::default(),
        }
    }
}

/// Renders reports to PNG line charts.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Draws the confirmed/deaths/recovered series of the report's first
    /// location and writes the chart to `path`.
    ///
    /// The output format follows the file extension; PNG is the expected
    /// choice. The report is only read, never mutated.
    pub fn render(&self, report: &Report, path: &Path) -> Result<(), RenderError> {
        let location = report
            .locations
            .first()
            .ok_or(RenderError::EmptyLocations)?;

        let confirmed = location.timelines.confirmed.timeline.sorted_points();
        let deaths = location.timelines.deaths.timeline.sorted_points();
        let recovered = location.timelines.recovered.timeline.sorted_points();

        let (x_range, y_max) = plot_bounds(&[&confirmed, &deaths, &recovered])
            .ok_or(RenderError::NoDataPoints)?;

        let root = BitMapBackend::new(path, self.config.size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let title = chart_title(location);
        let mut chart = ChartBuilder::on(&root)
            .caption(&title, ("sans-serif", 14))
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(45)
            .build_cartesian_2d(x_range, 0f64..y_max)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_desc("Datum")
            .y_desc("Personen")
            .x_labels(4)
            .x_label_formatter(&|timestamp: &DateTime<Utc>| {
                timestamp.format("%d.%m.%Y").to_string()
            })
            .draw()
            .map_err(draw_error)?;

        let series: [(&str, &[TimelinePoint], RGBColor); 3] = [
            ("Confirmed", &confirmed, RED),
            ("Deaths", &deaths, BLUE),
            (self.config.recovered_label.as_str(), &recovered, GREEN),
        ];
        for (label, points, color) in series {
            chart
                .draw_series(
                    LineSeries::new(
                        points.iter().map(|point| (point.timestamp, point.count as f64)),
                        color,
                    )
                    .point_size(2),
                )
                .map_err(draw_error)?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 16, y)], color)
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
        info!(path = %path.display(), "saved chart");
        Ok(())
    }
}

/// Title line shown above the chart, e.g.
/// `Corona in Germany from 18.03.2020 20:27:00`.
pub fn chart_title(location: &Location) -> String {
    format!(
        "Corona in {} from {}",
        location.country,
        location.last_updated.format("%d.%m.%Y %H:%M:%S")
    )
}

fn plot_bounds(series: &[&[TimelinePoint]]) -> Option<(Range<DateTime<Utc>>, f64)> {
    let mut min_ts: Option<DateTime<Utc>> = None;
    let mut max_ts: Option<DateTime<Utc>> = None;
    let mut max_count = 0u64;

    for points in series {
        for point in *points {
            min_ts = Some(min_ts.map_or(point.timestamp, |ts| ts.min(point.timestamp)));
            max_ts = Some(max_ts.map_or(point.timestamp, |ts| ts.max(point.timestamp)));
            max_count = max_count.max(point.count);
        }
    }

    let start = min_ts?;
    let mut end = max_ts?;
    if start == end {
        // A single-day span still needs a non-degenerate axis.
        end = end + Duration::days(1);
    }

    let y_max = (max_count as f64 * 1.05).max(1.0);
    Some((start..end, y_max))
}

fn draw_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::models::location::{Coordinates, Timelines};
    use crate::models::report::Latest;

    use super::*;

    #[test]
    fn title_contains_country_and_formatted_timestamp() {
        let location = Location {
            coordinates: Coordinates::default(),
            country: "Germany".to_string(),
            country_code: "DE".to_string(),
            id: 120,
            last_updated: Utc.with_ymd_and_hms(2020, 3, 18, 20, 27, 0).unwrap(),
            latest: Latest::default(),
            province: String::new(),
            timelines: Timelines::default(),
        };

        assert_eq!(
            chart_title(&location),
            "Corona in Germany from 18.03.2020 20:27:00"
        );
    }

    #[test]
    fn recovered_label_spelling_is_configurable() {
        assert_eq!(RecoveredLabel::Legacy.as_str(), "Recoverd");
        assert_eq!(RecoveredLabel::Corrected.as_str(), "Recovered");
    }

    #[test]
    fn plot_bounds_span_all_series() {
        let ts = |day| Utc.with_ymd_and_hms(2020, 3, day, 0, 0, 0).unwrap();
        let a = vec![
            TimelinePoint { timestamp: ts(18), count: 3 },
            TimelinePoint { timestamp: ts(20), count: 9 },
        ];
        let b = vec![TimelinePoint { timestamp: ts(25), count: 4 }];

        let (range, y_max) = plot_bounds(&[&a, &b]).unwrap();

        assert_eq!(range.start, ts(18));
        assert_eq!(range.end, ts(25));
        assert_eq!(y_max, 9.0 * 1.05);
    }

    #[test]
    fn plot_bounds_reject_all_empty_series() {
        assert!(plot_bounds(&[&[], &[], &[]]).is_none());
    }
}
