//! Domain types passed between pipeline stages.

use serde::{Deserialize, Serialize};

/// Title of the outline entry that the assembler must skip: the assembler
/// always emits its own title slide separately.
pub const TITLE_SLIDE_MARKER: &str = "Title Slide";

/// Plain text extracted from a PDF, one `[Page N]` marker per page.
///
/// Produced once per uploaded document and immutable thereafter. The
/// extractor only returns it when the accumulated length clears the
/// configured minimum, so downstream stages can assume usable content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Concatenated per-page text with page markers.
    pub text: String,
}

impl ExtractedDocument {
    /// Wrap already-extracted text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The prefix of the text embedded in generation prompts.
    pub fn prompt_excerpt(&self, max_chars: usize) -> &str {
        chunk_prefix(&self.text, max_chars)
    }
}

/// Ordered slide titles parsed from an outline.
///
/// Order matches the order of appearance in the outline text. The plan may
/// still contain the title-slide marker entry; filtering it out is the
/// assembler's job, as is capping to the configured slide count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidePlan {
    /// Slide titles in outline order.
    pub titles: Vec<String>,
}

impl SlidePlan {
    /// Build a plan from parsed titles.
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }

    /// Parse a plan straight from outline text.
    pub fn from_outline(outline: &str) -> Self {
        Self::new(crate::outline::parse_outline(outline))
    }

    /// Number of planned entries, title-slide marker included.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the plan holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Titles that become content slides, capped at `max_slides`.
    ///
    /// Entries matching [`TITLE_SLIDE_MARKER`] are skipped; the cap applies
    /// to the plan before the skip, mirroring the assembly loop.
    pub fn content_titles(&self, max_slides: usize) -> impl Iterator<Item = &str> {
        self.titles
            .iter()
            .take(max_slides)
            .map(String::as_str)
            .filter(|t| *t != TITLE_SLIDE_MARKER)
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters, cut on a
/// character boundary.
pub fn chunk_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
