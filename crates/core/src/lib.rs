//! Core domain types, outline parsing, and content fix-up rules
//! for PDF-to-presentation generation.

pub mod config;
pub mod content;
pub mod error;
pub mod outline;
pub mod service;
pub mod types;

pub use config::{GeminiConfig, PipelineConfig};
pub use content::{ensure_bullets, EMPTY_RESULT_PLACEHOLDER, SERVICE_FAILURE_PLACEHOLDER};
pub use error::{Error, Result};
pub use outline::parse_outline;
pub use service::{GenerationService, SlideContentSource};
pub use types::{chunk_prefix, ExtractedDocument, SlidePlan, TITLE_SLIDE_MARKER};
