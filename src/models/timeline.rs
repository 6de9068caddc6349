//! Per-metric cumulative timelines and their chart-ready sorted form.
//!
//! The wire format delivers each timeline as a JSON object keyed by
//! timestamp, and the key order is whatever the upstream serializer produced.
//! Anything that needs chronological order (charting, serialization of
//! derived data) must go through [`Timeline::sorted_points`] rather than
//! relying on map iteration order.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A mapping from timestamp to cumulative count for one metric.
///
/// Keys are unique; contiguity and order are not guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline(IndexMap<DateTime<Utc>, u64>);

/// A single (timestamp, count) pair in chronological position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    pub timestamp: DateTime<Utc>,
    pub count: u64,
}

impl Timeline {
    /// Materializes the mapping into points sorted ascending by timestamp.
    ///
    /// The source mapping is left untouched. An empty timeline yields an
    /// empty vector.
    pub fn sorted_points(&self) -> Vec<TimelinePoint> {
        let mut points: Vec<TimelinePoint> = self
            .0
            .iter()
            .map(|(&timestamp, &count)| TimelinePoint { timestamp, count })
            .collect();
        points.sort_by_key(|point| point.timestamp);
        points
    }

    /// Iterates the pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateTime<Utc>, &u64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(DateTime<Utc>, u64)> for Timeline {
    fn from_iter<I: IntoIterator<Item = (DateTime<Utc>, u64)>>(iter: I) -> Self {
        Timeline(iter.into_iter().collect())
    }
}
