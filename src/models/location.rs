//! One geographic reporting unit (country or province) and its metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::report::Latest;
use crate::models::timeline::Timeline;

/// Geographic coordinates as reported by the API. Kept as text, not parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// One metric's history: the newest count plus its full timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Most recent cumulative count for this metric.
    pub latest: u64,
    /// Per-day cumulative counts, keyed by timestamp in wire order.
    pub timeline: Timeline,
}

/// The confirmed/deaths/recovered series bundle for a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timelines {
    pub confirmed: MetricSeries,
    pub deaths: MetricSeries,
    pub recovered: MetricSeries,
}

/// One country/province record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinates: Coordinates,
    pub country: String,
    pub country_code: String,
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    pub latest: Latest,
    pub province: String,
    /// Absent when the request was made without timelines.
    #[serde(default)]
    pub timelines: Timelines,
}
