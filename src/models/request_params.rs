use serde::{Deserialize, Serialize};

/// Parameters for requesting a single country's report.
///
/// This is the standard input for all [`DataProvider`](crate::providers::DataProvider)
/// implementations. The country code is required; providers do not assume a
/// default country.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportRequestParams {
    /// ISO country code to filter on (e.g. `"DE"`).
    pub country_code: String,

    /// Whether the response should include the per-day timelines.
    ///
    /// Without them the report still carries the latest aggregates, but
    /// there is nothing to chart.
    pub timelines: bool,
}
