//! Prompt templates for outline and slide content generation.
//!
//! Both prompts embed at most `chunk_size` characters of the extracted
//! document and instruct the service to stick to facts from the source with
//! page references. The outline template demands exactly five labeled
//! entries; its line shape must stay in sync with the outline parser.

use deck_core::ExtractedDocument;

/// Build the outline generation prompt.
pub fn outline_prompt(doc: &ExtractedDocument, title: &str, chunk_size: usize) -> String {
    let excerpt = doc.prompt_excerpt(chunk_size);
    format!(
        r#"Create a detailed PowerPoint outline from this document for title: "{title}".

DOCUMENT CONTENT:
{excerpt}

REQUIRED OUTPUT FORMAT:
Slide 1: [Title Slide] - Title: "{title}", Subtitle: "[Document summary]"
Slide 2: [Introduction] - [3-5 specific points from document]
Slide 3: [Key Finding 1] - [Detailed content from document with page reference]
Slide 4: [Key Finding 2] - [Detailed content from document with page reference]
Slide 5: [Conclusion] - [Actionable takeaways]

RULES:
- Create exactly 5 slides
- Each slide must have concrete content instructions
- Include specific facts/numbers/quotes when available
- Never invent information not in the document
- Include page references like (Page 5) when possible
"#
    )
}

/// Build the per-slide content generation prompt.
pub fn slide_content_prompt(
    doc: &ExtractedDocument,
    slide_title: &str,
    chunk_size: usize,
) -> String {
    let excerpt = doc.prompt_excerpt(chunk_size);
    format!(
        r#"Generate specific content for PowerPoint slide titled: "{slide_title}"

DOCUMENT CONTENT:
{excerpt}

REQUIREMENTS:
1. Extract 3-5 specific points from the document
2. Each point must include concrete details
3. Use only factual information from the document
4. Format as bullet points with page references like (Page 3)
5. If no specific content found, use general document themes

EXAMPLE OUTPUT:
- Revenue increased by 23% in Q3 (Page 5)
- Customer satisfaction reached 4.8/5 (Page 8)
- New products launched in September (Page 12)
"#
    )
}
