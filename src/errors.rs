use thiserror::Error;

use crate::providers::errors::ProviderError;
use crate::render::errors::RenderError;

/// The unified error type for the `corona_tracker` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from a data provider (transport, status, decode).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An error originating from the chart renderer.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
