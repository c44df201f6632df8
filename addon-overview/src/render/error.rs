//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while rendering the overview.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Failed to read the template or write the output.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
