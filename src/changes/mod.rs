//! Turning commit history into release notes
//!
//! Commits are bucketed by their conventional-commit type, rendered into a
//! prompt next to the business context, and handed to an LLM provider.

mod classifier;
pub mod prompt;
mod releasenotes;

pub use classifier::{Category, CategoryBuckets, categorize_commits, classify_commit};
pub use releasenotes::ReleaseNotesGenerator;
