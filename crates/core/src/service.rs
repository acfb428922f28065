//! Seams between the pipeline and its external collaborators.

use crate::error::Result;

/// An opaque text-completion capability.
///
/// Given a prompt, returns generated text or fails. The pipeline treats all
/// failures uniformly and never retries; retrying is a caller concern.
pub trait GenerationService {
    /// Run one blocking completion request.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Supplier of body text for a planned slide.
///
/// Implementations must always return usable bullet-formatted text; failures
/// are absorbed internally so assembly never blocks on a single slide.
pub trait SlideContentSource {
    /// Produce the body text for the slide with the given title.
    fn content_for(&self, slide_title: &str) -> String;
}
