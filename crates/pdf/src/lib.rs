//! PDF text extraction backends with fallback.
//!
//! Two provider backends share one trait: `pdf-extract` is tried first,
//! `lopdf` only when the first pass accumulated too little text.

pub mod extractor;
pub mod providers;

pub use extractor::TextExtractor;
pub use providers::{ExtractionProvider, LopdfProvider, PdfExtractProvider};
