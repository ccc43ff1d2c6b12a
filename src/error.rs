//! Error types for the card renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or rendering a card
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (caller contract violation)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Aspect ratio string could not be parsed as "native" or "W/H"
    #[error("Invalid aspect ratio {input:?}: {reason}")]
    AspectRatioError {
        /// The offending input string
        input: String,
        /// Why parsing failed
        reason: String,
    },

    /// Failed to fetch a remote font stylesheet
    ///
    /// Never surfaced by `render` itself (font loading is best-effort); only
    /// returned through the `FontSource` seam so the renderer can log it.
    #[error("Font fetch failed for {url}: {reason}")]
    FontFetchError {
        /// Stylesheet URL
        url: String,
        /// Underlying failure description
        reason: String,
    },

    /// Failed to produce a render pass
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
