//! Release notes document
//!
//! The generative service drives the structure of the Markdown; this type only
//! distinguishes generated content from the two fixed fallbacks.

/// Markdown release notes, either generated or a fallback notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    /// The full markdown content of the release notes
    pub content: String,
}

impl ReleaseNotes {
    /// Wrap generated text, trimming surrounding whitespace
    pub fn generated(text: &str) -> Self {
        Self {
            content: text.trim().to_string(),
        }
    }

    /// Document used when the service answered without any text
    pub fn not_generated(to_tag: &str) -> Self {
        Self {
            content: format!("# Release Notes for {to_tag}\n\nCould not generate AI summary."),
        }
    }

    /// Document used when the service call itself failed
    pub fn generation_failed(to_tag: &str) -> Self {
        Self {
            content: format!("# Release Notes for {to_tag}\n\nAI summary generation failed."),
        }
    }

    /// File name the notes are written to for a given target tag
    pub fn file_name(to_tag: &str) -> String {
        format!("release_notes_{to_tag}.md")
    }

    /// Get the raw markdown content (for file output, etc.)
    pub fn raw_content(&self) -> &str {
        &self.content
    }
}
