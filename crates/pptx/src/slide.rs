//! Slide part XML generation.
//!
//! Slides are the only package parts carrying user text, so they are written
//! through quick-xml's writer to get attribute and text escaping right.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Body text size in hundredths of a point (18 pt).
const BODY_FONT_SIZE: &str = "1800";
/// Body text color.
const BODY_COLOR: &str = "000000";
/// Title text size in hundredths of a point.
const TITLE_FONT_SIZE: &str = "3200";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn xml_err(e: impl std::fmt::Display) -> Error {
    Error::Xml(e.to_string())
}

fn start(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    w.write_event(Event::Start(elem)).map_err(xml_err)
}

fn empty(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    w.write_event(Event::Empty(elem)).map_err(xml_err)
}

fn end(w: &mut XmlWriter, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)
}

fn text(w: &mut XmlWriter, value: &str) -> Result<()> {
    w.write_event(Event::Text(BytesText::new(value))).map_err(xml_err)
}

/// Placeholder kind for a shape, mirroring the slide layout roles.
enum Placeholder {
    CenterTitle,
    Subtitle,
    Title,
    Body,
}

impl Placeholder {
    fn attrs(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Placeholder::CenterTitle => vec![("type", "ctrTitle")],
            Placeholder::Subtitle => vec![("type", "subTitle"), ("idx", "1")],
            Placeholder::Title => vec![("type", "title")],
            Placeholder::Body => vec![("type", "body"), ("idx", "1")],
        }
    }
}

/// Position and size of a shape in EMUs.
struct Frame {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

/// Render the title slide part: presentation title plus generation timestamp.
pub fn title_slide_xml(title: &str, subtitle: &str) -> Result<Vec<u8>> {
    slide_xml(|w| {
        write_shape(
            w,
            2,
            "Title 1",
            Placeholder::CenterTitle,
            Frame { x: 1_200_000, y: 2_400_000, cx: 9_792_000, cy: 1_500_000 },
            &[title],
            TextStyle::Title,
        )?;
        write_shape(
            w,
            3,
            "Subtitle 2",
            Placeholder::Subtitle,
            Frame { x: 1_200_000, y: 4_000_000, cx: 9_792_000, cy: 900_000 },
            &[subtitle],
            TextStyle::Plain,
        )
    })
}

/// Render a content slide part: slide title plus bullet body paragraphs.
///
/// Every body paragraph gets the fixed formatting: 18 pt, black, left
/// aligned.
pub fn content_slide_xml(title: &str, body_lines: &[&str]) -> Result<Vec<u8>> {
    slide_xml(|w| {
        write_shape(
            w,
            2,
            "Title 1",
            Placeholder::Title,
            Frame { x: 600_000, y: 300_000, cx: 10_992_000, cy: 1_000_000 },
            &[title],
            TextStyle::Title,
        )?;
        write_shape(
            w,
            3,
            "Content Placeholder 2",
            Placeholder::Body,
            Frame { x: 600_000, y: 1_500_000, cx: 10_992_000, cy: 5_000_000 },
            body_lines,
            TextStyle::Body,
        )
    })
}

/// Wrap shape rendering in the common slide skeleton.
fn slide_xml(write_shapes: impl FnOnce(&mut XmlWriter) -> Result<()>) -> Result<Vec<u8>> {
    let mut w = Writer::new(Cursor::new(Vec::new()));
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_err)?;

    start(
        &mut w,
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    start(&mut w, "p:cSld", &[])?;
    start(&mut w, "p:spTree", &[])?;

    start(&mut w, "p:nvGrpSpPr", &[])?;
    empty(&mut w, "p:cNvPr", &[("id", "1"), ("name", "")])?;
    empty(&mut w, "p:cNvGrpSpPr", &[])?;
    empty(&mut w, "p:nvPr", &[])?;
    end(&mut w, "p:nvGrpSpPr")?;
    empty(&mut w, "p:grpSpPr", &[])?;

    write_shapes(&mut w)?;

    end(&mut w, "p:spTree")?;
    end(&mut w, "p:cSld")?;
    start(&mut w, "p:clrMapOvr", &[])?;
    empty(&mut w, "a:masterClrMapping", &[])?;
    end(&mut w, "p:clrMapOvr")?;
    end(&mut w, "p:sld")?;

    Ok(w.into_inner().into_inner())
}

/// Run formatting applied to a paragraph's text.
enum TextStyle {
    /// Slide titles: larger font, default color.
    Title,
    /// Subtitle text: default everything.
    Plain,
    /// Content body: fixed size, color, and alignment per paragraph.
    Body,
}

fn write_shape(
    w: &mut XmlWriter,
    id: u32,
    name: &str,
    placeholder: Placeholder,
    frame: Frame,
    paragraphs: &[&str],
    style: TextStyle,
) -> Result<()> {
    let id = id.to_string();

    start(w, "p:sp", &[])?;

    start(w, "p:nvSpPr", &[])?;
    empty(w, "p:cNvPr", &[("id", id.as_str()), ("name", name)])?;
    start(w, "p:cNvSpPr", &[])?;
    empty(w, "a:spLocks", &[("noGrp", "1")])?;
    end(w, "p:cNvSpPr")?;
    start(w, "p:nvPr", &[])?;
    empty(w, "p:ph", &placeholder.attrs())?;
    end(w, "p:nvPr")?;
    end(w, "p:nvSpPr")?;

    start(w, "p:spPr", &[])?;
    start(w, "a:xfrm", &[])?;
    empty(w, "a:off", &[("x", &frame.x.to_string()), ("y", &frame.y.to_string())])?;
    empty(w, "a:ext", &[("cx", &frame.cx.to_string()), ("cy", &frame.cy.to_string())])?;
    end(w, "a:xfrm")?;
    end(w, "p:spPr")?;

    start(w, "p:txBody", &[])?;
    empty(w, "a:bodyPr", &[])?;
    empty(w, "a:lstStyle", &[])?;
    for paragraph in paragraphs {
        write_paragraph(w, paragraph, &style)?;
    }
    end(w, "p:txBody")?;

    end(w, "p:sp")
}

fn write_paragraph(w: &mut XmlWriter, content: &str, style: &TextStyle) -> Result<()> {
    start(w, "a:p", &[])?;

    if matches!(style, TextStyle::Body) {
        empty(w, "a:pPr", &[("algn", "l")])?;
    }

    start(w, "a:r", &[])?;
    match style {
        TextStyle::Title => {
            empty(w, "a:rPr", &[("lang", "en-US"), ("sz", TITLE_FONT_SIZE)])?;
        }
        TextStyle::Plain => {
            empty(w, "a:rPr", &[("lang", "en-US")])?;
        }
        TextStyle::Body => {
            start(w, "a:rPr", &[("lang", "en-US"), ("sz", BODY_FONT_SIZE)])?;
            start(w, "a:solidFill", &[])?;
            empty(w, "a:srgbClr", &[("val", BODY_COLOR)])?;
            end(w, "a:solidFill")?;
            end(w, "a:rPr")?;
        }
    }
    start(w, "a:t", &[])?;
    text(w, content)?;
    end(w, "a:t")?;
    end(w, "a:r")?;

    end(w, "a:p")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_str(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_title_slide_carries_title_and_subtitle() {
        let xml = as_str(title_slide_xml("Q3 Report", "Generated 01 Jan 2025 09:00").unwrap());

        assert!(xml.contains("<a:t>Q3 Report</a:t>"));
        assert!(xml.contains("<a:t>Generated 01 Jan 2025 09:00</a:t>"));
        assert!(xml.contains("type=\"ctrTitle\""));
        assert!(xml.contains("type=\"subTitle\""));
    }

    #[test]
    fn test_content_slide_paragraph_formatting() {
        let xml = as_str(
            content_slide_xml("Key Finding 1", &["- Revenue grew (Page 5)", "- Costs fell"])
                .unwrap(),
        );

        assert!(xml.contains("<a:t>Key Finding 1</a:t>"));
        assert_eq!(xml.matches("algn=\"l\"").count(), 2, "one pPr per body line");
        assert_eq!(xml.matches("sz=\"1800\"").count(), 2);
        assert_eq!(xml.matches("val=\"000000\"").count(), 2);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let xml = as_str(content_slide_xml("R&D <Update>", &["- 5 > 3 & 2 < 4"]).unwrap());

        assert!(xml.contains("R&amp;D &lt;Update&gt;"));
        assert!(xml.contains("5 &gt; 3 &amp; 2 &lt; 4"));
        assert!(!xml.contains("<Update>"));
    }

    #[test]
    fn test_slide_skeleton_is_well_formed() {
        let xml = as_str(content_slide_xml("T", &["- b"]).unwrap());

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<p:spTree>"));
        assert!(xml.ends_with("</p:sld>"));
        assert!(xml.contains("<a:masterClrMapping/>"));
    }
}
