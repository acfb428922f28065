//! Error types for the presentation generation pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a PDF into a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Neither extraction backend yielded sufficient text.
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// The generation service call failed.
    #[error("Generation service error: {0}")]
    Generation(String),

    /// The generation service could not be initialized.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to build the presentation artifact.
    #[error("Presentation assembly failed: {0}")]
    Assembly(String),

    /// ZIP packaging error (for PPTX output).
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML writing error (for PPTX output).
    #[error("XML error: {0}")]
    Xml(String),
}
