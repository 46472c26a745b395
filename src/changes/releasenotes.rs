use super::classifier::CategoryBuckets;
use super::prompt::{build_context, create_release_notes_prompt};
use crate::llm_providers::LLMProvider;
use crate::types::{ReleaseNotes, WorkItem};
use crate::{log_debug, log_error, log_warn};

/// Struct responsible for generating release notes
pub struct ReleaseNotesGenerator;

impl ReleaseNotesGenerator {
    /// Generates release notes for `to_tag` from the story and categorized commits.
    ///
    /// Never fails: an empty answer yields the "could not generate" document and
    /// a provider error yields the "generation failed" document.
    pub async fn generate(
        provider: &dyn LLMProvider,
        story: Option<&WorkItem>,
        buckets: &CategoryBuckets,
        to_tag: &str,
    ) -> ReleaseNotes {
        let context = build_context(story, buckets);
        let prompt = create_release_notes_prompt(to_tag, &context);
        log_debug!("Release notes prompt:\n{}", prompt);

        match provider.generate(&prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => ReleaseNotes::generated(&text),
            Ok(_) => {
                log_warn!("Generative service returned no text for {}", to_tag);
                ReleaseNotes::not_generated(to_tag)
            }
            Err(e) => {
                log_error!("Error calling generative service: {:#}", e);
                crate::ui::print_error(&format!("Error calling Gemini API: {e:#}"));
                ReleaseNotes::generation_failed(to_tag)
            }
        }
    }
}
