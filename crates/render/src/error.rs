//! Render-side errors.

use thiserror::Error;

use facturo_core::DomainError;
use facturo_layout::LayoutError;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Input contract violation (e.g. a kind-required field is missing).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Layout gave up (page cap).
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The PDF backend failed to assemble the byte stream.
    #[error("pdf emission failed: {0}")]
    Pdf(String),
}
