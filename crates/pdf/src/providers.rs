//! Extraction provider backends.
//!
//! Each backend turns a PDF byte slice into per-page text. Backends take the
//! full slice on every call, so a second pass over the same document needs no
//! rewinding and the providers stay idempotent.

use deck_core::{Error, Result};
use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};

/// An interchangeable strategy for turning PDF bytes into per-page text.
///
/// Providers are tried in priority order until the accumulated text passes
/// the sufficiency threshold; see [`crate::TextExtractor`].
pub trait ExtractionProvider {
    /// Backend name used in warnings.
    fn name(&self) -> &'static str;

    /// Extract the text of every page, in page order.
    ///
    /// Pages without any text come back as empty strings so page numbering
    /// stays aligned with the document.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>>;
}

/// Primary backend built on the `pdf-extract` crate.
///
/// `pdf-extract` can panic on malformed input rather than returning errors,
/// so the call is wrapped in `catch_unwind` and panics surface as ordinary
/// extraction errors.
#[derive(Debug, Default)]
pub struct PdfExtractProvider;

impl PdfExtractProvider {
    /// Create the primary backend.
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionProvider for PdfExtractProvider {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        let owned = data.to_vec(); // owned copy for the unwind boundary
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&owned)
        }));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(Error::Extraction(format!("pdf-extract failed: {e}"))),
            Err(_) => Err(Error::Extraction(
                "pdf-extract panicked (malformed document)".into(),
            )),
        }
    }
}

/// Fallback backend built on the `lopdf` crate.
#[derive(Debug, Default)]
pub struct LopdfProvider;

impl LopdfProvider {
    /// Create the fallback backend.
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionProvider for LopdfProvider {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        let doc = Document::load_mem(data)
            .map_err(|e| Error::Extraction(format!("lopdf failed to load document: {e}")))?;

        let mut pages = Vec::new();
        for (page_num, _page_id) in doc.get_pages() {
            // A page that fails to decode yields an empty entry; the page
            // numbering must stay aligned for the [Page N] markers.
            let text = doc.extract_text(&[page_num]).unwrap_or_default();
            pages.push(text);
        }

        Ok(pages)
    }
}
