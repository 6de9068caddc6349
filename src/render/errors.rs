use thiserror::Error;

/// Errors that can occur while rendering a report to a chart image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The report contains no locations to plot.
    #[error("report contains no locations")]
    EmptyLocations,

    /// Every timeline of the plotted location is empty.
    #[error("location has no timeline points to plot")]
    NoDataPoints,

    /// The chart backend failed while drawing or saving the image.
    #[error("chart rendering failed: {0}")]
    Draw(String),
}
