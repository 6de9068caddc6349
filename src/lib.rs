//! Fetches COVID-19 case statistics for a single country and renders them as
//! a time-series line chart.
//!
//! The crate is a linear pipeline with two components, used leaves-first: a
//! [`DataProvider`](providers::DataProvider) issues one HTTP GET and
//! deserializes the response into a [`Report`](models::report::Report), and a
//! [`ChartRenderer`](render::ChartRenderer) sorts the report's timelines into
//! chronological points and draws them to a PNG file.

pub mod errors;
pub mod models;
pub mod providers;
pub mod render;

use std::path::Path;

use crate::errors::Error;
use crate::models::request_params::ReportRequestParams;
use crate::providers::DataProvider;
use crate::render::ChartRenderer;

/// Fetches a country's report and renders it to a chart in one step.
///
/// Fetch and render failures both propagate as [`Error`]; callers that want
/// the tolerant fetch behavior should use
/// [`fetch_report_lenient`](providers::fetch_report_lenient) and render the
/// report themselves.
pub async fn fetch_and_render(
    provider: &dyn DataProvider,
    params: ReportRequestParams,
    renderer: &ChartRenderer,
    output: &Path,
) -> Result<(), Error> {
    let report = provider.fetch_report(params).await?;
    renderer.render(&report, output)?;
    Ok(())
}
