//! PPTX (Office Open XML) writer backend.
//!
//! Assembles a title slide and generated content slides into a widescreen
//! .pptx package, produced entirely in memory as a ZIP archive of XML parts.

pub mod assemble;
pub mod package;
pub mod slide;

pub use assemble::PresentationAssembler;
