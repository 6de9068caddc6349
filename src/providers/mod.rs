//! Provider abstraction for case-report sources.
//!
//! This module defines the [`DataProvider`] trait, the unified interface for
//! fetching a country's case report from a remote source. Each concrete
//! provider (currently the coronavirus-tracker API) handles its own endpoint
//! layout and error classification.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) so callers can swap sources at runtime, including
//! test stand-ins.

pub mod errors;
pub mod tracker;

use async_trait::async_trait;
use tracing::warn;

use crate::models::report::Report;
use crate::models::request_params::ReportRequestParams;
use crate::providers::errors::ProviderError;

#[async_trait]
pub trait DataProvider {
    async fn fetch_report(&self, params: ReportRequestParams) -> Result<Report, ProviderError>;
}

/// Fetches a report, treating transport and status failures as "no data".
///
/// An unreachable or erroring API is logged and reported as an absent
/// result, leaving the retry-or-abort decision to the caller. A body that
/// fails to decode is surfaced as an error instead, so callers never act on
/// silently truncated data.
pub async fn fetch_report_lenient(
    provider: &dyn DataProvider,
    params: ReportRequestParams,
) -> Result<Option<Report>, ProviderError> {
    match provider.fetch_report(params).await {
        Ok(report) => Ok(Some(report)),
        Err(err @ (ProviderError::Request(_) | ProviderError::Status { .. })) => {
            warn!(error = %err, "report fetch failed; returning no data");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
