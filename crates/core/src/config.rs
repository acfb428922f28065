//! Pipeline and generation-service configuration.
//!
//! Both config values are constructed once at startup and stay immutable for
//! the life of the process; every pipeline step borrows them.

use crate::error::{Error, Result};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Gemini model used for outline and slide content generation.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Limits and thresholds for the document-to-presentation pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum accepted PDF size in megabytes.
    pub max_pdf_size_mb: u64,

    /// Maximum number of content slides emitted by the assembler.
    pub max_slides: usize,

    /// Soft cap (in characters) on text accumulated per extraction pass and
    /// on the source text embedded in each prompt.
    pub chunk_size: usize,

    /// Minimum extracted-text length considered sufficient.
    pub min_content_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_pdf_size_mb: 50,
            max_slides: 10,
            chunk_size: 15_000,
            min_content_length: 100,
        }
    }
}

impl PipelineConfig {
    /// Create a config with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of content slides.
    pub fn with_max_slides(mut self, max_slides: usize) -> Self {
        self.max_slides = max_slides.max(1);
        self
    }

    /// Set the per-request text chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the minimum acceptable extracted-text length.
    pub fn with_min_content_length(mut self, min_content_length: usize) -> Self {
        self.min_content_length = min_content_length;
        self
    }

    /// Maximum accepted PDF size in bytes.
    pub fn max_pdf_size_bytes(&self) -> u64 {
        self.max_pdf_size_mb * 1024 * 1024
    }
}

/// Connection and sampling parameters for the Gemini generation service.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the generative language endpoint.
    pub api_key: String,

    /// Model identifier, e.g. `gemini-1.5-pro`.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus sampling cutoff.
    pub top_p: f32,

    /// Top-k sampling cutoff.
    pub top_k: u32,

    /// Output token cap per request.
    pub max_output_tokens: u32,
}

impl GeminiConfig {
    /// Build a config with the fixed sampling parameters and the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }

    /// Read the API key from the environment.
    ///
    /// A missing or empty key is a [`Error::Configuration`] failure; the
    /// caller is expected to halt before accepting any document.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(Error::Configuration(format!(
                "{API_KEY_ENV} is not set; cannot initialize the generation service"
            ))),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
