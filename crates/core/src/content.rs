//! Fix-up rules guaranteeing usable slide content.
//!
//! Slide bodies must always contain at least one bullet line, so the
//! assembler never has to handle empty content. Two placeholder texts exist:
//! one substituted when the service answered with blank text, one substituted
//! when the service call itself failed.

/// Bullet markers recognized in generated content.
pub const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

/// Placeholder for a service response that came back blank.
pub const EMPTY_RESULT_PLACEHOLDER: &str =
    "- Key point from document (Page X)\n- Important finding (Page Y)\n- Relevant detail (Page Z)";

/// Placeholder for a failed service call.
pub const SERVICE_FAILURE_PLACEHOLDER: &str =
    "- Document point 1 (Page X)\n- Document point 2 (Page Y)\n- Document point 3 (Page Z)";

/// Whether the text contains any recognized bullet marker.
pub fn has_bullet_marker(text: &str) -> bool {
    text.contains(BULLET_MARKERS)
}

/// Normalize generated slide content into bullet-formatted text.
///
/// Blank input is replaced with [`EMPTY_RESULT_PLACEHOLDER`]. Non-blank input
/// without any bullet marker is re-wrapped by prefixing the first line and
/// every line break with `- `. Input that already carries a marker is
/// returned unchanged.
pub fn ensure_bullets(content: &str) -> String {
    if content.trim().is_empty() {
        EMPTY_RESULT_PLACEHOLDER.to_string()
    } else if !has_bullet_marker(content) {
        format!("- {}", content.replace('\n', "\n- "))
    } else {
        content.to_string()
    }
}
