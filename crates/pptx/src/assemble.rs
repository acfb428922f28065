//! Presentation assembly: slide plan in, finished .pptx bytes out.

use crate::{package, slide};
use deck_core::{Error, PipelineConfig, Result, SlideContentSource, SlidePlan};

/// Assembles the title slide and generated content slides into a package.
///
/// Assembly is all-or-nothing: any failure while rendering or packaging
/// fails the whole operation and no partial artifact is exposed.
pub struct PresentationAssembler<'a> {
    cfg: &'a PipelineConfig,
}

impl<'a> PresentationAssembler<'a> {
    /// Create an assembler bound to the pipeline limits.
    pub fn new(cfg: &'a PipelineConfig) -> Self {
        Self { cfg }
    }

    /// Build the complete presentation.
    ///
    /// Emits one title slide (presentation title plus generation timestamp),
    /// then walks the plan up to `max_slides` entries, skipping the
    /// title-slide marker and pulling each body synchronously from the
    /// content source.
    pub fn assemble(
        &self,
        title: &str,
        plan: &SlidePlan,
        source: &dyn SlideContentSource,
    ) -> Result<Vec<u8>> {
        let generated_at = chrono::Local::now().format("%d %b %Y %H:%M").to_string();
        self.assemble_at(title, plan, source, &generated_at)
    }

    /// Assembly with an explicit timestamp string, split out for testing.
    pub(crate) fn assemble_at(
        &self,
        title: &str,
        plan: &SlidePlan,
        source: &dyn SlideContentSource,
        generated_at: &str,
    ) -> Result<Vec<u8>> {
        let mut slides = Vec::new();

        let subtitle = format!("Generated {generated_at}");
        slides.push(slide::title_slide_xml(title, &subtitle).map_err(as_assembly)?);

        for slide_title in plan.content_titles(self.cfg.max_slides) {
            let content = source.content_for(slide_title);
            let display_title = slide_title.replace(['[', ']'], "");
            let body_lines: Vec<&str> = content.split('\n').collect();

            log::debug!("rendering slide '{display_title}' ({} lines)", body_lines.len());
            slides
                .push(slide::content_slide_xml(&display_title, &body_lines).map_err(as_assembly)?);
        }

        package::write_package(&slides).map_err(as_assembly)
    }
}

/// Fold lower-level rendering and packaging errors into the assembly
/// failure class surfaced to the caller.
fn as_assembly(e: Error) -> Error {
    match e {
        Error::Assembly(_) => e,
        other => Error::Assembly(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::content::SERVICE_FAILURE_PLACEHOLDER;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    /// Content source returning a fixed body for every slide.
    struct FixedSource(&'static str);

    impl SlideContentSource for FixedSource {
        fn content_for(&self, _slide_title: &str) -> String {
            self.0.to_string()
        }
    }

    fn cfg() -> PipelineConfig {
        PipelineConfig::default()
    }

    fn slide_count(data: &[u8]) -> usize {
        let archive = ZipArchive::new(Cursor::new(data.to_vec())).unwrap();
        archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .count()
    }

    fn read_slide(data: &[u8], n: usize) -> String {
        let mut archive = ZipArchive::new(Cursor::new(data.to_vec())).unwrap();
        let mut part = archive.by_name(&format!("ppt/slides/slide{n}.xml")).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    fn five_slide_plan() -> SlidePlan {
        SlidePlan::new(vec![
            "Title Slide".to_string(),
            "Introduction".to_string(),
            "Key Finding 1".to_string(),
            "Key Finding 2".to_string(),
            "Conclusion".to_string(),
        ])
    }

    #[test]
    fn test_five_entry_plan_yields_five_slides() {
        let cfg = cfg();
        let assembler = PresentationAssembler::new(&cfg);
        let source = FixedSource("- Point (Page 1)");

        let data = assembler
            .assemble_at("Q3 Report", &five_slide_plan(), &source, "01 Jan 2025 09:00")
            .unwrap();

        // 1 title slide + 4 content slides; the marker entry is skipped.
        assert_eq!(slide_count(&data), 5);
        let title_slide = read_slide(&data, 1);
        assert!(title_slide.contains("<a:t>Q3 Report</a:t>"));
        assert!(title_slide.contains("<a:t>Generated 01 Jan 2025 09:00</a:t>"));
        assert!(read_slide(&data, 2).contains("<a:t>Introduction</a:t>"));
        assert!(read_slide(&data, 5).contains("<a:t>Conclusion</a:t>"));
    }

    #[test]
    fn test_plan_longer_than_cap_is_truncated() {
        let cfg = PipelineConfig::default().with_max_slides(3);
        let assembler = PresentationAssembler::new(&cfg);
        let source = FixedSource("- Point");

        let titles: Vec<String> = (1..=20).map(|i| format!("Topic {i}")).collect();
        let data = assembler
            .assemble_at("T", &SlidePlan::new(titles), &source, "now")
            .unwrap();

        // Cap applies to content slides; the title slide is always added.
        assert_eq!(slide_count(&data), 4);
    }

    #[test]
    fn test_edited_three_entry_plan() {
        let cfg = cfg();
        let assembler = PresentationAssembler::new(&cfg);
        let source = FixedSource("- Point");

        let plan = SlidePlan::new(vec![
            "Title Slide".to_string(),
            "Key Finding 1".to_string(),
            "Conclusion".to_string(),
        ]);
        let data = assembler.assemble_at("T", &plan, &source, "now").unwrap();

        assert_eq!(slide_count(&data), 3);
    }

    #[test]
    fn test_placeholder_content_still_assembles() {
        let cfg = cfg();
        let assembler = PresentationAssembler::new(&cfg);
        let source = FixedSource(SERVICE_FAILURE_PLACEHOLDER);

        let data = assembler
            .assemble_at("T", &five_slide_plan(), &source, "now")
            .unwrap();

        let body = read_slide(&data, 2);
        assert!(body.contains("<a:t>- Document point 1 (Page X)</a:t>"));
        assert!(body.contains("<a:t>- Document point 3 (Page Z)</a:t>"));
    }

    #[test]
    fn test_brackets_stripped_from_display_title() {
        let cfg = cfg();
        let assembler = PresentationAssembler::new(&cfg);
        let source = FixedSource("- Point");

        let plan = SlidePlan::new(vec!["[Key] Finding [1]".to_string()]);
        let data = assembler.assemble_at("T", &plan, &source, "now").unwrap();

        assert!(read_slide(&data, 2).contains("<a:t>Key Finding 1</a:t>"));
    }

    #[test]
    fn test_packaging_errors_surface_as_assembly_failures() {
        let wrapped = as_assembly(Error::Zip("archive broke".into()));
        assert!(matches!(wrapped, Error::Assembly(ref msg) if msg.contains("archive broke")));

        let wrapped = as_assembly(Error::Xml("bad part".into()));
        assert!(matches!(wrapped, Error::Assembly(ref msg) if msg.contains("bad part")));

        // Already-classified failures are passed through untouched.
        let wrapped = as_assembly(Error::Assembly("direct".into()));
        assert!(matches!(wrapped, Error::Assembly(ref msg) if msg == "direct"));
    }

    #[test]
    fn test_empty_plan_yields_title_slide_only() {
        let cfg = cfg();
        let assembler = PresentationAssembler::new(&cfg);
        let source = FixedSource("- Point");

        let data = assembler
            .assemble_at("T", &SlidePlan::new(Vec::new()), &source, "now")
            .unwrap();

        assert_eq!(slide_count(&data), 1);
    }
}
