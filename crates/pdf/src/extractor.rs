//! Multi-backend text extraction with lazy fallback.

use crate::providers::{ExtractionProvider, LopdfProvider, PdfExtractProvider};
use deck_core::{Error, ExtractedDocument, PipelineConfig, Result};

/// Extracts plain text from a PDF, trying providers in priority order.
///
/// A provider pass appends page text to a shared buffer with `[Page N]`
/// markers and stops early once the buffer clears the configured chunk size
/// (a soft cap: the current page is still appended in full). The next
/// provider only runs when the buffer is still below the minimum content
/// length, and it appends rather than replaces, so partial text from a
/// half-failed first pass is kept.
pub struct TextExtractor {
    providers: Vec<Box<dyn ExtractionProvider>>,
}

impl TextExtractor {
    /// Build the standard chain: `pdf-extract` first, `lopdf` as fallback.
    pub fn new() -> Self {
        Self {
            providers: vec![
                Box::new(PdfExtractProvider::new()),
                Box::new(LopdfProvider::new()),
            ],
        }
    }

    /// Build an extractor over a custom provider chain.
    pub fn with_providers(providers: Vec<Box<dyn ExtractionProvider>>) -> Self {
        Self { providers }
    }

    /// Extract text from a PDF byte slice.
    ///
    /// Returns an [`Error::Extraction`] when no provider chain pass
    /// accumulated more than the minimum content length; the document is
    /// then likely scanned or otherwise non-textual.
    pub fn extract(&self, data: &[u8], cfg: &PipelineConfig) -> Result<ExtractedDocument> {
        let mut text = String::new();

        for provider in &self.providers {
            if text.len() >= cfg.min_content_length {
                break; // fallback is lazy
            }

            match provider.extract_pages(data) {
                Ok(pages) => append_pages(&mut text, &pages, cfg.chunk_size),
                Err(e) => {
                    // Keep whatever earlier passes accumulated.
                    log::warn!("{} failed: {e}", provider.name());
                }
            }
        }

        if text.len() > cfg.min_content_length {
            Ok(ExtractedDocument::new(text))
        } else {
            Err(Error::Extraction(
                "Failed to extract sufficient text (document may be scanned)".into(),
            ))
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Append non-empty pages with `[Page N]` markers, honoring the soft cap.
fn append_pages(text: &mut String, pages: &[String], chunk_size: usize) {
    for (i, page_text) in pages.iter().enumerate() {
        if !page_text.is_empty() {
            text.push_str(&format!("\n\n[Page {}]\n{}", i + 1, page_text));
        }
        if text.len() > chunk_size {
            break;
        }
    }
}
