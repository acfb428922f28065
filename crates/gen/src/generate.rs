//! Outline and slide content generation over a [`GenerationService`].
//!
//! The two steps have opposite failure policies: a failed outline call is
//! fatal to that step and reported verbatim, while per-slide content calls
//! are absorbed with placeholder bullets so assembly never stalls on a
//! single slide.

use crate::prompt;
use deck_core::{
    content, ExtractedDocument, GenerationService, PipelineConfig, Result, SlideContentSource,
};

/// Generate the raw outline text for the document.
///
/// One service call, no retry. The returned text is not validated here; the
/// outline parser tolerates malformed lines and humans may edit the text
/// before assembly anyway.
pub fn generate_outline<S: GenerationService>(
    service: &S,
    cfg: &PipelineConfig,
    doc: &ExtractedDocument,
    title: &str,
) -> Result<String> {
    let prompt = prompt::outline_prompt(doc, title, cfg.chunk_size);
    service.complete(&prompt)
}

/// Best-effort slide body generator with a two-tier fallback.
///
/// Tier one fixes up a successful but unusable response (blank text gets a
/// placeholder, unbulleted text gets re-wrapped). Tier two substitutes a
/// distinct placeholder when the service call itself fails. Either way the
/// assembler always receives non-empty bullet-formatted text.
pub struct SlideContentGenerator<'a, S: GenerationService> {
    service: &'a S,
    cfg: &'a PipelineConfig,
    doc: &'a ExtractedDocument,
}

impl<'a, S: GenerationService> SlideContentGenerator<'a, S> {
    /// Bind the generator to a service, config, and source document.
    pub fn new(service: &'a S, cfg: &'a PipelineConfig, doc: &'a ExtractedDocument) -> Self {
        Self { service, cfg, doc }
    }

    /// Generate body text for one slide. Never fails observably.
    pub fn generate(&self, slide_title: &str) -> String {
        let prompt = prompt::slide_content_prompt(self.doc, slide_title, self.cfg.chunk_size);

        match self.service.complete(&prompt) {
            Ok(text) => content::ensure_bullets(&text),
            Err(e) => {
                log::warn!("content generation for '{slide_title}' failed: {e}");
                content::SERVICE_FAILURE_PLACEHOLDER.to_string()
            }
        }
    }
}

impl<S: GenerationService> SlideContentSource for SlideContentGenerator<'_, S> {
    fn content_for(&self, slide_title: &str) -> String {
        self.generate(slide_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{content, Error};
    use std::cell::RefCell;

    /// Service stub returning canned responses in order.
    struct ScriptedService {
        responses: RefCell<Vec<Result<String>>>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedService {
        fn new(responses: Vec<Result<String>>) -> Self {
            Self {
                responses: RefCell::new(responses),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn always_failing() -> Self {
            Self {
                responses: RefCell::new(Vec::new()),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl GenerationService for ScriptedService {
        fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            let mut responses = self.responses.borrow_mut();
            if responses.is_empty() {
                Err(Error::Generation("service unavailable".into()))
            } else {
                responses.remove(0)
            }
        }
    }

    fn doc() -> ExtractedDocument {
        ExtractedDocument::new("[Page 1]\nRevenue grew 23% in Q3.")
    }

    #[test]
    fn test_generate_outline_passes_through_text() {
        let service = ScriptedService::new(vec![Ok("Slide 1: [Title Slide] - x".into())]);
        let cfg = PipelineConfig::default();

        let outline = generate_outline(&service, &cfg, &doc(), "Q3 Report").unwrap();
        assert_eq!(outline, "Slide 1: [Title Slide] - x");

        let prompts = service.prompts.borrow();
        assert_eq!(prompts.len(), 1, "exactly one call, no retry");
        assert!(prompts[0].contains("Q3 Report"));
    }

    #[test]
    fn test_generate_outline_failure_is_fatal() {
        let service = ScriptedService::always_failing();
        let cfg = PipelineConfig::default();

        let err = generate_outline(&service, &cfg, &doc(), "Q3 Report").unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
        assert_eq!(service.prompts.borrow().len(), 1, "no automatic retry");
    }

    #[test]
    fn test_content_bulleted_response_passes_through() {
        let service = ScriptedService::new(vec![Ok("- Revenue grew 23% (Page 1)".into())]);
        let cfg = PipelineConfig::default();
        let doc = doc();
        let generator = SlideContentGenerator::new(&service, &cfg, &doc);

        assert_eq!(
            generator.generate("Key Finding 1"),
            "- Revenue grew 23% (Page 1)"
        );
    }

    #[test]
    fn test_content_blank_response_gets_empty_placeholder() {
        // Tier one: the call succeeded but returned nothing usable.
        let service = ScriptedService::new(vec![Ok("   ".into())]);
        let cfg = PipelineConfig::default();
        let doc = doc();
        let generator = SlideContentGenerator::new(&service, &cfg, &doc);

        assert_eq!(
            generator.generate("Key Finding 1"),
            content::EMPTY_RESULT_PLACEHOLDER
        );
    }

    #[test]
    fn test_content_unbulleted_response_is_rewrapped() {
        let service = ScriptedService::new(vec![Ok("Revenue grew\nCustomers happy".into())]);
        let cfg = PipelineConfig::default();
        let doc = doc();
        let generator = SlideContentGenerator::new(&service, &cfg, &doc);

        assert_eq!(
            generator.generate("Key Finding 1"),
            "- Revenue grew\n- Customers happy"
        );
    }

    #[test]
    fn test_content_service_failure_gets_failure_placeholder() {
        // Tier two: the call itself failed; distinct placeholder, no error.
        let service = ScriptedService::always_failing();
        let cfg = PipelineConfig::default();
        let doc = doc();
        let generator = SlideContentGenerator::new(&service, &cfg, &doc);

        assert_eq!(
            generator.generate("Key Finding 1"),
            content::SERVICE_FAILURE_PLACEHOLDER
        );
    }

    #[test]
    fn test_content_is_never_blank() {
        let responses: Vec<Result<String>> = vec![
            Ok(String::new()),
            Ok("plain sentence".into()),
            Err(Error::Generation("boom".into())),
        ];
        for response in responses {
            let service = ScriptedService::new(vec![response]);
            let cfg = PipelineConfig::default();
            let doc = doc();
            let generator = SlideContentGenerator::new(&service, &cfg, &doc);

            let body = generator.generate("Slide");
            assert!(!body.trim().is_empty());
            assert!(content::has_bullet_marker(&body));
        }
    }
}
