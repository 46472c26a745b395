use super::classifier::{Category, CategoryBuckets};
use crate::types::WorkItem;
use std::fmt::Write;

pub const BUSINESS_CONTEXT_HEADING: &str = "## Business Context (from ServiceNow)";
pub const TECHNICAL_HEADING: &str = "## Technical Implementation (from Git Commits)";
pub const NO_CHANGES_PLACEHOLDER: &str = "No specific user-facing code changes were categorized.";

/// Render the input data block: business context (when a story was found)
/// followed by one subsection per non-empty category.
pub fn build_context(story: Option<&WorkItem>, buckets: &CategoryBuckets) -> String {
    let mut context = String::new();

    if let Some(story) = story {
        write!(
            context,
            "{BUSINESS_CONTEXT_HEADING}\n- **User Story:** {} - {}\n\n",
            story.number(),
            story.short_description()
        )
        .expect("writing to string should never fail");
    }

    context.push_str(TECHNICAL_HEADING);
    context.push('\n');

    let mut has_changes = false;
    for category in Category::ALL {
        let bullets = buckets.get(category);
        if bullets.is_empty() {
            continue;
        }
        write!(context, "{}\n{}\n\n", category.heading(), bullets.join("\n"))
            .expect("writing to string should never fail");
        has_changes = true;
    }

    if !has_changes {
        context.push_str(NO_CHANGES_PLACEHOLDER);
        context.push('\n');
    }

    context
}

/// Embed the rendered context into the release-notes instructions for `to_tag`.
pub fn create_release_notes_prompt(to_tag: &str, context: &str) -> String {
    let mut prompt = format!(
        "\nYou are an expert technical writer tasked with creating a professional release note for version '{to_tag}'.\n\n"
    );

    prompt.push_str(
        "You are provided with two sources of input:
1. **Business Context** – from ServiceNow (stories, tasks, PIs). This explains the purpose and value from the user's perspective.
2. **Technical Implementation** – from GitHub commit history. This provides the exact technical changes made.

### Instructions:
1. **Executive Summary**
   - Begin with a user-friendly summary of the release, explaining the new capabilities or fixes from the ServiceNow stories.
   - Clearly connect these stories to their business value.

2. **Detailed Release Notes**
   - Create structured sections such as **New Features**, **Improvements**, and **Bug Fixes**.
   - For each item, combine **ServiceNow data** (story/task title, description, business purpose) with **GitHub commit details** (actual code or config changes).
   - Ensure both perspectives are visible — e.g., start with the business need (story), then show the supporting technical work (commits).

3. **Formatting**
   - Use Markdown with headings, bullet points, and sub-sections.
   - Be concise and professional.
   - Do not simply list commits or stories separately — weave them into a single narrative.

### Input Data
",
    );

    prompt.push_str(context.trim());
    prompt.push('\n');

    prompt
}
