//! release-weaver - narrative release notes from ServiceNow stories and GitHub history
//!
//! A run looks up the story behind a release, categorizes the conventional
//! commits between two tags, and asks a generative-text service to weave both
//! into one Markdown document.

#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic

pub mod changes;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod github;
pub mod llm_providers;
pub mod logger;
pub mod servicenow;
pub mod types;
pub mod ui;

pub use changes::{Category, CategoryBuckets, categorize_commits, classify_commit};
pub use commands::{ReleaseOutcome, ReleaseRequest, run_release_notes};
pub use config::{Config, ConfigError};
pub use github::{CommitSource, GitHubClient};
pub use llm_providers::{GeminiProvider, LLMProvider};
pub use servicenow::{ServiceNowClient, WorkItemSource};
pub use types::{Commit, ReleaseNotes, WorkItem};
