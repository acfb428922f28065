//! Tolerant parser for the semi-structured slide outline.
//!
//! The generation service is asked for lines shaped like
//! `Slide 1: [Introduction] - three points from the document`, but its output
//! is not contractually guaranteed and humans may edit the outline before it
//! reaches assembly. Every line is matched independently and lines that do
//! not fit the shape are skipped without error.

/// Separator between an outline entry's head and its description.
const ENTRY_SEPARATOR: &str = " - ";

/// Separator between the `Slide N` prefix and the slide title.
const TITLE_SEPARATOR: &str = ": ";

/// Parse outline text into an ordered list of slide titles.
///
/// Per line: the line must start with the literal token `Slide`; the text
/// before the first `" - "` is split on `": "` and the second segment taken;
/// surrounding square brackets are stripped. Anything after the first
/// `" - "` is discarded, even when the separator also appears inside the
/// description — an accepted lossy behavior that keeps re-parsing of edited
/// outlines stable.
///
/// No slide-count cap is applied here; capping happens at assembly.
pub fn parse_outline(outline: &str) -> Vec<String> {
    let mut titles = Vec::new();

    for line in outline.lines() {
        if !line.starts_with("Slide") {
            continue;
        }
        let Some((head, _description)) = line.split_once(ENTRY_SEPARATOR) else {
            continue;
        };
        let Some(raw_title) = head.split(TITLE_SEPARATOR).nth(1) else {
            continue;
        };
        let title = raw_title.trim_matches(['[', ']']);
        titles.push(title.to_string());
    }

    titles
}
