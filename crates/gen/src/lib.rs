//! Generation-service client and the outline/content generation steps.

pub mod client;
pub mod generate;
pub mod prompt;

pub use client::GeminiClient;
pub use generate::{generate_outline, SlideContentGenerator};
