//! Release-notes run orchestration
//!
//! Steps run strictly in sequence: story lookup, commit fetch,
//! classification, generation, file write. Lookup and fetch are best effort,
//! so a run with valid credentials always produces an output file.

use crate::changes::{ReleaseNotesGenerator, categorize_commits};
use crate::config::Config;
use crate::github::{CommitSource, GitHubClient};
use crate::llm_providers::{GeminiProvider, LLMProvider};
use crate::servicenow::{ServiceNowClient, WorkItemSource};
use crate::types::ReleaseNotes;
use crate::{log_debug, log_info, ui};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::Instrument;

/// What to build release notes for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Repository as `owner/name`
    pub repo: String,
    pub from_tag: String,
    pub to_tag: String,
    /// Public number of the story behind this release
    pub story_id: String,
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    pub path: PathBuf,
    pub notes: ReleaseNotes,
    pub commit_count: usize,
    pub story_found: bool,
}

/// Run the full pipeline against the given sources and write the notes into
/// `output_dir`.
pub async fn run_release_notes(
    stories: &dyn WorkItemSource,
    commits: &dyn CommitSource,
    provider: &dyn LLMProvider,
    request: &ReleaseRequest,
    output_dir: &Path,
) -> Result<ReleaseOutcome> {
    let story = if request.story_id.trim().is_empty() {
        None
    } else {
        stories
            .get_story_details(&request.story_id)
            .instrument(tracing::info_span!("story_lookup", story_id = %request.story_id))
            .await
    };
    log_debug!("Story lookup for {:?} found: {}", request.story_id, story.is_some());

    let history = commits
        .compare_commits(&request.repo, &request.from_tag, &request.to_tag)
        .instrument(tracing::info_span!(
            "compare_commits",
            repo = %request.repo,
            from = %request.from_tag,
            to = %request.to_tag
        ))
        .await;
    ui::print_info(&format!(
        "Found {} commits. Categorizing now...",
        history.len()
    ));

    let buckets = categorize_commits(&history);
    log_info!(
        "Categorized {} of {} commits for {}",
        buckets.len(),
        history.len(),
        request.to_tag
    );

    let spinner = ui::create_spinner("Sending your detailed prompt to Gemini AI...");
    let notes =
        ReleaseNotesGenerator::generate(provider, story.as_ref(), &buckets, &request.to_tag)
            .instrument(tracing::info_span!("generate_release_notes", to_tag = %request.to_tag))
            .await;
    spinner.finish_and_clear();

    let path = output_dir.join(ReleaseNotes::file_name(&request.to_tag));
    write_release_notes(&path, &notes)?;

    Ok(ReleaseOutcome {
        path,
        notes,
        commit_count: history.len(),
        story_found: story.is_some(),
    })
}

/// Write the notes to `path`; the file handle is released before returning.
pub fn write_release_notes(path: &Path, notes: &ReleaseNotes) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(notes.raw_content().as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

/// Build the live clients from `config` and run the pipeline.
pub async fn handle_release_notes_command(
    request: &ReleaseRequest,
    servicenow_instance: &str,
    config: &Config,
    output_dir: &Path,
) -> Result<()> {
    log_debug!("Configuration: {:?}", config);

    let servicenow = ServiceNowClient::new(
        servicenow_instance,
        &config.servicenow_user,
        &config.servicenow_password,
    )?;

    let mut github = GitHubClient::new(&config.github_token)?;
    if let Some(api_url) = &config.github_api_url {
        github = github.with_base_url(api_url);
    }

    let gemini = GeminiProvider::new(
        &config.gemini_api_key,
        config.gemini_model.as_deref().unwrap_or_default(),
    )?;

    let outcome = run_release_notes(&servicenow, &github, &gemini, request, output_dir).await?;

    ui::print_success(&format!(
        "✅ Successfully generated final release notes: {}",
        outcome.path.display()
    ));
    ui::print_message("\n--- Generated Content ---\n");
    ui::print_bordered_content(outcome.notes.raw_content());

    Ok(())
}
