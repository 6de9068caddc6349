//! Top-level report returned by the tracker API.

use serde::{Deserialize, Serialize};

use crate::models::location::Location;

/// Cumulative counts for the three tracked metrics.
///
/// Appears both as the global aggregate on [`Report`] and as the per-location
/// aggregate on [`Location`](crate::models::location::Location).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latest {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// The full API response: global totals plus every reporting location.
///
/// A report with zero locations is valid data; consumers that need a
/// location must check for themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Global aggregate across all locations.
    pub latest: Latest,
    /// Location entries in the order the API returned them.
    pub locations: Vec<Location>,
}
